//! Camera for ray generation.

use crate::Ray;
use lux_core::CameraDesc;
use lux_math::Vec3;

/// A pinhole camera defined by an eye point and a view basis.
///
/// `forward`, `right` and `up` are expected to be orthogonal; nothing here
/// checks it. The length of `forward` relative to `right`/`up` sets the field
/// of view: a unit basis gives 90 degrees across the larger image dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Create a camera from an explicit basis.
    pub fn new(eye: Vec3, forward: Vec3, right: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            forward,
            right,
            up,
        }
    }

    /// Create a camera looking along `forward`, deriving `right` and
    /// re-orthogonalizing `up`. `forward` keeps its length.
    pub fn look(eye: Vec3, forward: Vec3, up: Vec3) -> Self {
        let right = forward.cross(up).normalize();
        let up = right.cross(forward).normalize();
        Self::new(eye, forward, right, up)
    }

    /// Apply scene file overrides on top of the default camera.
    pub fn from_description(desc: &CameraDesc) -> Self {
        let default = Camera::default();
        if desc.is_default() {
            return default;
        }
        Camera::look(
            desc.eye.unwrap_or(default.eye),
            desc.forward.unwrap_or(default.forward),
            desc.up.unwrap_or(default.up),
        )
    }

    /// Ray through pixel (x, y) of a `width` x `height` image.
    ///
    /// Screen coordinates are scaled by the larger dimension so the aspect
    /// ratio is preserved, and y is flipped so row 0 is the top of the image.
    pub fn ray_for_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let (w, h) = (width as f32, height as f32);
        let scale = w.max(h);
        let sx = (2.0 * x as f32 - w) / scale;
        let sy = (h - 2.0 * y as f32) / scale;

        let direction = (self.forward + self.right * sx + self.up * sy).normalize();
        Ray::new(self.eye, direction)
    }
}

impl Default for Camera {
    /// Eye at the origin looking down -Z with +Y up.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::NEG_Z, Vec3::X, Vec3::Y)
    }
}
