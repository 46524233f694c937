//! Infinite plane primitive.

use std::sync::Arc;

use crate::{
    intersectable::{HitRecord, Intersectable},
    Material, Ray,
};
use lux_math::{Interval, Vec3};

/// `|direction · normal|` below this counts as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// A plane through `point` with unit `normal`.
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<dyn Material>,
}

impl Plane {
    /// Define a plane with a point on it and a normal.
    pub fn new(point: Vec3, normal: Vec3, material: Arc<dyn Material>) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            material,
        }
    }

    /// Define a plane by `Ax + By + Cz + D = 0`.
    ///
    /// The reference point is taken on the first axis with a non-zero
    /// coefficient. All-zero coefficients give a degenerate plane that no
    /// ray hits.
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32, material: Arc<dyn Material>) -> Self {
        let point = if a != 0.0 {
            Vec3::X * (-d / a)
        } else if b != 0.0 {
            Vec3::Y * (-d / b)
        } else if c != 0.0 {
            Vec3::Z * (-d / c)
        } else {
            Vec3::ZERO
        };
        Self::new(point, Vec3::new(a, b, c), material)
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Intersectable for Plane {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let denominator = ray.direction().dot(self.normal);
        // A NaN normal (all-zero coefficients) is treated as parallel
        if denominator.is_nan() || denominator.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denominator;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(HitRecord {
            t,
            point: ray.at(t),
            normal: self.normal,
            material: self.material.as_ref(),
        })
    }
}
