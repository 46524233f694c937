//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    intersectable::{HitRecord, Intersectable},
    Material, Ray,
};
use lux_math::{Interval, Vec3};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Intersectable for Sphere {
    /// Projected closest-approach test.
    ///
    /// From outside, the near crossing is returned. From inside, the far
    /// crossing is returned so the ray still ends on the boundary.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - ray.origin();
        let rad_sq = self.radius * self.radius;
        let inside = oc.length_squared() < rad_sq;

        let dir_len_sq = ray.direction().length_squared();
        // Ray parameter of the closest approach to the center
        let tc = oc.dot(ray.direction()) / dir_len_sq;
        if !inside && tc < 0.0 {
            return None;
        }

        let dd = (ray.at(tc) - self.center).length_squared();
        if !inside && dd > rad_sq {
            return None;
        }

        let t_offset = (rad_sq - dd).max(0.0).sqrt() / dir_len_sq.sqrt();
        let t = if inside { tc + t_offset } else { tc - t_offset };

        // Also rejects NaN from a zero-length direction
        if !ray_t.surrounds(t) {
            return None;
        }

        let point = ray.at(t);
        Some(HitRecord {
            t,
            point,
            normal: (point - self.center).normalize(),
            material: self.material.as_ref(),
        })
    }
}
