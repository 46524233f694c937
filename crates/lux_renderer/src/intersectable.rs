//! Intersectable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray};
use lux_math::{Interval, Vec3};

/// Record of a ray-object intersection.
///
/// Only ever produced for an actual hit; a miss is `None`.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection point
    pub normal: Vec3,
    /// Material of the object that was hit
    pub material: &'a dyn Material,
}

impl std::fmt::Debug for HitRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRecord")
            .field("t", &self.t)
            .field("point", &self.point)
            .field("normal", &self.normal)
            .finish_non_exhaustive()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Intersectable: Send + Sync {
    /// Intersect a ray with this object.
    ///
    /// Returns the hit if one exists with `t` strictly inside `ray_t`.
    /// Parallel rays, hits behind or exactly at the ray origin, and hits at
    /// or past `ray_t.max` are misses.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// A flat list of intersectable objects resolving to the nearest hit.
pub struct IntersectableList {
    objects: Vec<Box<dyn Intersectable>>,
}

impl IntersectableList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Intersectable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for IntersectableList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Box<dyn Intersectable>>> for IntersectableList {
    fn from(objects: Vec<Box<dyn Intersectable>>) -> Self {
        Self { objects }
    }
}

impl Intersectable for IntersectableList {
    /// Linear scan. A member only replaces the current hit when strictly
    /// nearer, so equal distances keep the first object in list order.
    /// Hits at or beyond `ray_t.max` are discarded.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.intersect(ray, ray_t.with_max(closest_so_far)) {
                if rec.t < closest_so_far {
                    closest_so_far = rec.t;
                    closest = Some(rec);
                }
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Diffuse, Sphere};
    use lux_math::Color;
    use std::sync::Arc;

    fn sphere(center: Vec3, radius: f32, color: Color) -> Box<dyn Intersectable> {
        Box::new(Sphere::new(center, radius, Arc::new(Diffuse::new(color))))
    }

    #[test]
    fn test_empty_list_misses() {
        let list = IntersectableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(list.is_empty());
        assert!(list.intersect(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_nearest_hit_wins() {
        let mut list = IntersectableList::new();
        // Far sphere first so scan order can't pick the right answer by accident
        list.add(sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, Color::X));
        list.add(sphere(Vec3::new(0.0, 0.0, -3.0), 1.5, Color::Y));
        assert_eq!(list.len(), 2);

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = list.intersect(&ray, Interval::FORWARD).unwrap();

        assert!((rec.t - 1.5).abs() < 1e-5, "t = {}", rec.t);
    }

    #[test]
    fn test_equal_distance_keeps_first() {
        let first = Arc::new(Diffuse::new(Color::X));
        let second = Arc::new(Diffuse::new(Color::Y));
        let mut list = IntersectableList::new();
        list.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, first.clone())));
        list.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, second)));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = list.intersect(&ray, Interval::FORWARD).unwrap();
        let scatter = rec.material.scatter(&ray, &rec).unwrap();

        assert_eq!(scatter.attenuation, Color::X);
    }

    #[test]
    fn test_distance_cutoff() {
        let mut list = IntersectableList::new();
        list.add(sphere(Vec3::new(0.0, 0.0, -2000.0), 1.0, Color::ONE));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(list.intersect(&ray, Interval::new(0.0, 1000.0)).is_none());
        assert!(list.intersect(&ray, Interval::FORWARD).is_some());
    }

    #[test]
    fn test_nested_list() {
        let mut inner = IntersectableList::new();
        inner.add(sphere(Vec3::new(0.0, 0.0, -4.0), 1.0, Color::ONE));
        let mut outer = IntersectableList::new();
        outer.add(Box::new(inner));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = outer.intersect(&ray, Interval::FORWARD).unwrap();
        assert!((rec.t - 3.0).abs() < 1e-5);
    }
}
