//! Color helpers.
//!
//! Colors share the vector type; only usage tells them apart. Channels are
//! linear and nominally in [0, 1].

use crate::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

pub const BLACK: Color = Vec3::ZERO;
pub const WHITE: Color = Vec3::ONE;

/// Per-component magnitude below which a vector counts as zero.
const NEAR_ZERO_EPSILON: f32 = 1e-4;

/// Clamp every channel to [0, 1].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    color.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Convert a color to 8-bit RGB, clamping first.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let c = clamp_color(color) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8]
}

/// True if every component of `v` is within epsilon of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < NEAR_ZERO_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_color() {
        let c = clamp_color(Color::new(-0.5, 0.25, 3.0));
        assert_eq!(c, Color::new(0.0, 0.25, 1.0));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let samples = [
            Color::new(-1.0, 2.0, 0.5),
            Color::new(0.0, 1.0, 0.999),
            Color::new(100.0, -100.0, 0.0),
        ];
        for c in samples {
            let once = clamp_color(c);
            assert_eq!(clamp_color(once), once);
        }
    }

    #[test]
    fn test_clamp_is_monotonic() {
        let lo = Color::new(-0.2, 0.3, 0.9);
        let hi = Color::new(0.1, 0.3, 1.7);
        let (a, b) = (clamp_color(lo), clamp_color(hi));
        assert!(a.x <= b.x && a.y <= b.y && a.z <= b.z);
    }

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(color_to_rgb8(WHITE), [255, 255, 255]);
        assert_eq!(color_to_rgb8(BLACK), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Color::new(0.5, 2.0, -1.0)), [127, 255, 0]);
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::new(1e-5, -1e-5, 0.0)));
        assert!(!near_zero(Vec3::new(0.0, 0.0, 0.01)));
    }
}
