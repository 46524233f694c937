//! Triangle primitive for ray tracing.
//!
//! Uses the geometric solution: intersect the supporting plane, then run an
//! inside-outside test against each of the three edges.

use std::sync::Arc;

use crate::{
    intersectable::{HitRecord, Intersectable},
    plane::PARALLEL_EPSILON,
    Material, Ray,
};
use lux_core::Vertex;
use lux_math::{near_zero, Interval, Vec3};

/// A triangle primitive.
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Winding normal `(v1 - v0) x (v2 - v0)`, not normalized. Its length is
    /// twice the triangle's area. Used for the edge tests.
    winding: Vec3,
    /// `winding` normalized, for the plane hit
    plane_normal: Vec3,
    /// Unit face normal, flipped to face the origin side of the triangle
    normal: Vec3,
    /// Per-vertex shading normals, only when all three are present
    vertex_normals: Option<[Vec3; 3]>,
    /// Material
    material: Arc<dyn Material>,
}

impl Triangle {
    /// Create a new flat-shaded triangle from three points.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Arc<dyn Material>) -> Self {
        Self::from_vertices([Vertex::new(v0), Vertex::new(v1), Vertex::new(v2)], material)
    }

    /// Create a triangle from vertices that may carry shading normals.
    ///
    /// Normals are interpolated only when every vertex has one; otherwise the
    /// flat face normal is used.
    pub fn from_vertices(vertices: [Vertex; 3], material: Arc<dyn Material>) -> Self {
        let [a, b, c] = vertices;
        let (v0, v1, v2) = (a.point, b.point, c.point);

        let winding = (v1 - v0).cross(v2 - v0);
        let plane_normal = winding.normalize();
        let mut normal = plane_normal;
        if normal.dot(v0) > 0.0 {
            normal = -normal;
        }

        let vertex_normals = match (a.normal, b.normal, c.normal) {
            (Some(n0), Some(n1), Some(n2)) => {
                Some([n0.normalize(), n1.normalize(), n2.normalize()])
            }
            _ => None,
        };

        Self {
            v0,
            v1,
            v2,
            winding,
            plane_normal,
            normal,
            vertex_normals,
            material,
        }
    }

    /// The unit face normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Shading normal at `p`, a point already known to be inside.
    fn shading_normal(&self, p: Vec3) -> Vec3 {
        let Some([n0, n1, n2]) = self.vertex_normals else {
            return self.normal;
        };

        // Each weight is the area of the sub-triangle opposite its vertex
        let area2 = self.winding.length();
        let w0 = (self.v2 - self.v1).cross(p - self.v1).length() / area2;
        let w1 = (self.v0 - self.v2).cross(p - self.v2).length() / area2;
        let w2 = (self.v1 - self.v0).cross(p - self.v0).length() / area2;

        let blended = n0 * w0 + n1 * w1 + n2 * w2;
        if near_zero(blended) {
            return self.normal;
        }

        let shading = blended.normalize();
        if shading.dot(self.normal) < 0.0 {
            -shading
        } else {
            shading
        }
    }
}

impl Intersectable for Triangle {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // Ray is parallel to the triangle (or the triangle is degenerate)
        let denominator = self.plane_normal.dot(ray.direction());
        if denominator.is_nan() || denominator.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.v0 - ray.origin()).dot(self.plane_normal) / denominator;
        if !ray_t.surrounds(t) {
            return None;
        }

        let p = ray.at(t);

        // Inside-outside test: P must be on the left of every edge
        let edges = [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)];
        for (start, end) in edges {
            if self.winding.dot((end - start).cross(p - start)) < 0.0 {
                return None;
            }
        }

        Some(HitRecord {
            t,
            point: p,
            normal: self.shading_normal(p),
            material: self.material.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Diffuse;

    fn material() -> Arc<dyn Material> {
        Arc::new(Diffuse::new(Vec3::splat(0.5)))
    }

    fn xy_triangle() -> Triangle {
        // Triangle in XY plane at z=-1
        Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            material(),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let tri = xy_triangle();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = tri.intersect(&ray, Interval::FORWARD).unwrap();

        assert!((rec.t - 1.0).abs() < 1e-5);
        assert!((rec.point - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_triangle_miss() {
        let tri = xy_triangle();

        // Ray pointing away
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(tri.intersect(&ray, Interval::FORWARD).is_none());

        // Hits the plane outside the triangle
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Z);
        assert!(tri.intersect(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_triangle_parallel() {
        let tri = xy_triangle();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::X);
        assert!(tri.intersect(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_winding_does_not_change_hits_or_facing() {
        let reversed = Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            material(),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = reversed.intersect(&ray, Interval::FORWARD).unwrap();

        assert!((rec.t - 1.0).abs() < 1e-5);
        // Face normal still points back toward the origin
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_interpolated_normals() {
        let tilted = Vec3::new(1.0, 0.0, 1.0).normalize();
        let tri = Triangle::from_vertices(
            [
                Vertex::with_normal(Vec3::new(-1.0, -1.0, -1.0), Vec3::Z),
                Vertex::with_normal(Vec3::new(1.0, -1.0, -1.0), tilted),
                Vertex::with_normal(Vec3::new(0.0, 1.0, -1.0), Vec3::Z),
            ],
            material(),
        );

        // Close to v1: normal leans toward v1's normal
        let target = Vec3::new(0.9, -0.95, -1.0);
        let ray = Ray::new(Vec3::ZERO, target.normalize());
        let rec = tri.intersect(&ray, Interval::FORWARD).unwrap();

        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
        assert!(rec.normal.x > 0.5, "normal = {:?}", rec.normal);
        assert!(rec.normal.z > 0.0);
    }

    #[test]
    fn test_missing_vertex_normal_falls_back_to_face() {
        let tri = Triangle::from_vertices(
            [
                Vertex::with_normal(Vec3::new(-1.0, -1.0, -1.0), Vec3::X),
                Vertex::new(Vec3::new(1.0, -1.0, -1.0)),
                Vertex::with_normal(Vec3::new(0.0, 1.0, -1.0), Vec3::X),
            ],
            material(),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = tri.intersect(&ray, Interval::FORWARD).unwrap();

        assert!((rec.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_plane_normal_is_unit_winding() {
        let tri = xy_triangle();
        assert!((tri.plane_normal.length() - 1.0).abs() < 1e-6);
        assert!(tri.plane_normal.cross(tri.winding).length() < 1e-5);
        assert!(tri.plane_normal.dot(tri.winding) > 0.0);
    }

    #[test]
    fn test_ray_starting_on_triangle_is_miss() {
        let tri = xy_triangle();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.5, -1.0).normalize());
        assert!(tri.intersect(&ray, Interval::FORWARD).is_none());
    }
}
