//! lux renderer - CPU Whitted-style ray tracing
//!
//! A recursive ray tracer with diffuse surfaces, point and directional
//! lights, hard shadows and row-parallel rendering.

mod intersectable;
mod material;
mod sphere;
mod plane;
mod triangle;
mod light;
mod scene;
mod camera;
mod partition;
mod renderer;
mod buffer;
mod output;

pub use intersectable::{HitRecord, Intersectable, IntersectableList};
pub use material::{Diffuse, Material, Scatter, SCATTER_BIAS};
pub use sphere::Sphere;
pub use plane::{Plane, PARALLEL_EPSILON};
pub use triangle::Triangle;
pub use light::Light;
pub use scene::{Background, Scene};
pub use camera::Camera;
pub use partition::partition_rows;
pub use renderer::{
    cast_ray, direct_lighting, light_contribution, render, render_pixel, render_scene,
    RenderConfig, RenderError, DEFAULT_BIAS, DEFAULT_HIT_EPSILON, DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_DISTANCE,
};
pub use buffer::{ImageBuffer, RowBand};
pub use output::{save, write_ppm, OutputError, OutputResult};

/// Re-export the math types used throughout the renderer
pub use lux_math::{Color, Interval, Ray, Vec3};
pub use lux_core::Vertex;
