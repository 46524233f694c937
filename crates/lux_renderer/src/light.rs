//! Light sources.

use lux_core::LightSource;
use lux_math::{Color, Vec3};

/// A light that illuminates points in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Point light with inverse-square falloff.
    Bulb { position: Vec3, color: Color },
    /// Infinitely distant light. `direction` points from the scene toward the light.
    Sun { direction: Vec3, color: Color },
}

impl Light {
    pub fn bulb(position: Vec3, color: Color) -> Self {
        Light::Bulb { position, color }
    }

    pub fn sun(direction: Vec3, color: Color) -> Self {
        Light::Sun { direction, color }
    }

    /// Vector from `point` toward the light. Not normalized.
    pub fn direction(&self, point: Vec3) -> Vec3 {
        match self {
            Light::Bulb { position, .. } => *position - point,
            Light::Sun { direction, .. } => *direction,
        }
    }

    /// Intensity scale at `point`.
    pub fn intensity(&self, point: Vec3) -> f32 {
        match self {
            Light::Bulb { .. } => 1.0 / self.direction(point).length_squared(),
            Light::Sun { .. } => 1.0,
        }
    }

    /// Distance an occluder has to be within to shadow `point`.
    pub fn distance(&self, point: Vec3) -> f32 {
        match self {
            Light::Bulb { position, .. } => (*position - point).length(),
            Light::Sun { .. } => f32::INFINITY,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Light::Bulb { color, .. } | Light::Sun { color, .. } => *color,
        }
    }
}

impl From<LightSource> for Light {
    fn from(source: LightSource) -> Self {
        match source {
            LightSource::Bulb { position, color } => Light::bulb(position, color),
            LightSource::Sun { direction, color } => Light::sun(direction, color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulb_falloff() {
        let bulb = Light::bulb(Vec3::new(0.0, 2.0, 0.0), Color::ONE);

        assert_eq!(bulb.direction(Vec3::ZERO), Vec3::new(0.0, 2.0, 0.0));
        assert!((bulb.intensity(Vec3::ZERO) - 0.25).abs() < 1e-6);
        assert!((bulb.distance(Vec3::ZERO) - 2.0).abs() < 1e-6);
        // Twice as far, a quarter of the light
        let far = bulb.intensity(Vec3::new(0.0, -2.0, 0.0));
        assert!((far - 0.0625).abs() < 1e-6);
    }

    #[test]
    fn test_sun_is_constant() {
        let sun = Light::sun(Vec3::new(1.0, 1.0, 1.0), Color::new(1.0, 0.9, 0.8));

        for point in [Vec3::ZERO, Vec3::new(100.0, -3.0, 7.0)] {
            assert_eq!(sun.direction(point), Vec3::ONE);
            assert_eq!(sun.intensity(point), 1.0);
            assert_eq!(sun.distance(point), f32::INFINITY);
        }
        assert_eq!(sun.color(), Color::new(1.0, 0.9, 0.8));
    }

    #[test]
    fn test_from_light_source() {
        let light: Light = LightSource::Bulb {
            position: Vec3::Y,
            color: Color::X,
        }
        .into();
        assert_eq!(light, Light::bulb(Vec3::Y, Color::X));
    }
}
