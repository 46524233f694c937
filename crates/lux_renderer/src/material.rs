//! Material trait for surface scattering.

use crate::{intersectable::HitRecord, Ray};
use lux_math::Color;

/// Offset along the normal applied to scattered ray origins.
pub const SCATTER_BIAS: f32 = 1e-4;

/// An outgoing ray and the color it is multiplied by.
#[derive(Debug, Clone, Copy)]
pub struct Scatter {
    /// Direction where light bounces off the object
    pub ray_out: Ray,
    /// Multiplicative color applied to light bounced off the object
    pub attenuation: Color,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed; the renderer treats that as black.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord) -> Option<Scatter>;
}

/// Flat diffuse material.
///
/// Bounces straight out along the surface normal with a fixed color.
#[derive(Debug, Clone)]
pub struct Diffuse {
    color: Color,
}

impl Diffuse {
    /// Create a new diffuse material with the given color.
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// The attenuation color of this material.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Material for Diffuse {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord) -> Option<Scatter> {
        let direction = rec.normal;
        let ray_out = Ray::new(rec.point + SCATTER_BIAS * direction, direction);
        Some(Scatter {
            ray_out,
            attenuation: self.color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_math::Vec3;

    #[test]
    fn test_diffuse_scatter_along_normal() {
        let material = Diffuse::new(Color::new(0.2, 0.4, 0.6));
        let rec = HitRecord {
            t: 1.0,
            point: Vec3::new(0.0, 0.0, -1.0),
            normal: Vec3::Z,
            material: &material,
        };
        let ray_in = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let scatter = material.scatter(&ray_in, &rec).unwrap();

        assert_eq!(scatter.attenuation, Color::new(0.2, 0.4, 0.6));
        assert_eq!(scatter.ray_out.direction(), Vec3::Z);
        // Origin is lifted off the surface
        assert!(scatter.ray_out.origin().z > -1.0);
        assert!((scatter.ray_out.origin().z + 1.0 - SCATTER_BIAS).abs() < 1e-6);
    }
}
