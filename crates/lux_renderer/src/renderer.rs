//! Core Whitted-style renderer.
//!
//! Implements recursive ray casting with:
//! - Direct lighting from every light, with shadow rays
//! - An additive bounce term from the material's scattered ray
//! - Row-band parallelism, one worker thread per band

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use lux_math::{clamp_color, Color, Interval, Ray, BLACK};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{partition_rows, Camera, HitRecord, ImageBuffer, Light, RowBand, Scene};

/// Default recursion depth.
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Default offset along the normal for shadow ray origins.
pub const DEFAULT_BIAS: f32 = 1e-4;

/// Default lower bound on hit distance. Hits this close to a ray origin,
/// including rays that start exactly on a surface, are misses.
pub const DEFAULT_HIT_EPSILON: f32 = 1e-4;

/// Default distance cutoff. Hits at or beyond it are treated as misses,
/// which keeps near-parallel rays from producing far-away garbage.
pub const DEFAULT_MAX_DISTANCE: f32 = 1000.0;

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to start render workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum recursion depth. 1 means direct lighting only.
    pub max_depth: u32,
    /// Number of row bands rendered in parallel
    pub workers: usize,
    /// Offset along the normal for shadow ray origins
    pub bias: f32,
    /// Smallest hit distance accepted by any intersection query
    pub hit_epsilon: f32,
    /// Distance cutoff for every intersection query
    pub max_distance: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            bias: DEFAULT_BIAS,
            hit_epsilon: DEFAULT_HIT_EPSILON,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl RenderConfig {
    /// Admissible hit distances for camera and bounce rays.
    pub fn hit_interval(&self) -> Interval {
        Interval::new(self.hit_epsilon, self.max_distance)
    }
}

/// Compute the color seen by a ray.
///
/// At depth 0 the background is returned without tracing. A hit contributes
/// its direct lighting plus, when `depth > 1`, the attenuated color of the
/// scattered ray. An absorbed ray is black.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth == 0 {
        return scene.background.color(ray);
    }

    let hit = match scene.intersect(ray, config.hit_interval()) {
        Some(hit) => hit,
        None => return scene.background.color(ray),
    };

    let scatter = match hit.material.scatter(ray, &hit) {
        Some(scatter) => scatter,
        None => return BLACK,
    };

    let mut color = direct_lighting(&hit, scatter.attenuation, scene, config);

    if depth > 1 {
        let bounced = cast_ray(&scatter.ray_out, scene, depth - 1, config);
        color += scatter.attenuation * bounced;
    }

    color
}

/// Sum of every light's contribution at a hit point.
pub fn direct_lighting(
    hit: &HitRecord,
    attenuation: Color,
    scene: &Scene,
    config: &RenderConfig,
) -> Color {
    scene
        .lights
        .iter()
        .map(|light| light_contribution(hit, attenuation, light, scene, config))
        .fold(BLACK, |acc, c| acc + c)
}

/// Lambertian contribution of one light, or black if the point is in shadow.
pub fn light_contribution(
    hit: &HitRecord,
    attenuation: Color,
    light: &Light,
    scene: &Scene,
    config: &RenderConfig,
) -> Color {
    let to_light = light.direction(hit.point).normalize();

    // Offset the origin so the shadow ray doesn't hit the surface it left
    let shadow_ray = Ray::new(hit.point + hit.normal * config.bias, to_light);
    let limit = light.distance(hit.point).min(config.max_distance);
    if scene.intersect(&shadow_ray, Interval::new(config.hit_epsilon, limit)).is_some() {
        return BLACK;
    }

    let cosine = hit.normal.dot(to_light).max(0.0);
    attenuation * light.color() * (light.intensity(hit.point) * cosine)
}

/// Render a single pixel to its final clamped color.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.ray_for_pixel(x, y, width, height);
    clamp_color(cast_ray(&ray, scene, config.max_depth, config))
}

/// Render every pixel of one row band.
fn render_band(
    band: &mut RowBand<'_>,
    camera: &Camera,
    scene: &Scene,
    height: u32,
    config: &RenderConfig,
) {
    let start = Instant::now();
    let width = band.width();
    for row in band.rows.clone() {
        for col in 0..width {
            let color = render_pixel(camera, scene, col, row, width, height, config);
            band.set_pixel(row, col, color);
        }
    }
    log::debug!(
        "Rows {}..{} rendered in {:?}",
        band.rows.start,
        band.rows.end,
        start.elapsed()
    );
}

/// Run `f` on a thread pool of `threads` workers that lives only for this
/// call. Returns `f`'s result and the number of workers that exited.
///
/// The workers are scoped threads, so every one of them has been joined by
/// the time this returns.
fn with_worker_pool<R>(
    threads: usize,
    f: impl FnOnce(&rayon::ThreadPool) -> R,
) -> Result<(R, usize), RenderError> {
    let exited = AtomicUsize::new(0);
    let result = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("lux-rows-{}", i))
        .build_scoped(
            |thread| {
                thread.run();
                exited.fetch_add(1, Ordering::SeqCst);
            },
            f,
        )?;
    Ok((result, exited.into_inner()))
}

/// Render the scene into an existing image buffer.
///
/// Rows are split into `config.workers` bands, each rendered by its own
/// thread. Every band is written and every worker joined when this returns.
/// With a single band the calling thread does the work.
pub fn render_scene(
    image: &mut ImageBuffer,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    let height = image.height;
    let partitions = partition_rows(height, config.workers);
    let start = Instant::now();

    log::info!(
        "Rendering {}x{} at depth {} with {} worker(s)",
        image.width,
        height,
        config.max_depth,
        partitions.len()
    );

    let mut bands = image.row_bands_mut(&partitions);

    if bands.len() <= 1 {
        for band in &mut bands {
            render_band(band, camera, scene, height, config);
        }
    } else {
        let threads = bands.len();
        let ((), joined) = with_worker_pool(threads, |pool| {
            pool.scope(|s| {
                for mut band in bands {
                    s.spawn(move |_| render_band(&mut band, camera, scene, height, config));
                }
            })
        })?;
        log::debug!("Joined {} of {} worker(s)", joined, threads);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(())
}

/// Allocate an image buffer and render the scene into it.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Result<ImageBuffer, RenderError> {
    let mut image = ImageBuffer::new(width, height);
    render_scene(&mut image, camera, scene, config)?;
    Ok(image)
}
