//! Scene description types.
//!
//! A `SceneDescription` is plain data: it names shapes, lights, the camera
//! and the background without committing to how a renderer represents them.

use lux_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// Default sky color ("sky blue") used when a scene does not set one.
pub const DEFAULT_SKY: Color = Vec3::new(0.5, 0.7, 1.0);

/// A triangle corner, optionally carrying its own shading normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub point: Vec3,
    pub normal: Option<Vec3>,
}

impl Vertex {
    /// A vertex without a normal.
    pub fn new(point: Vec3) -> Self {
        Self {
            point,
            normal: None,
        }
    }

    /// A vertex with a shading normal.
    pub fn with_normal(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: Some(normal),
        }
    }
}

/// A geometric primitive with the diffuse color it was declared with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Sphere {
        center: Vec3,
        radius: f32,
        color: Color,
    },
    /// Plane given by `Ax + By + Cz + D = 0`.
    Plane {
        coefficients: [f32; 4],
        color: Color,
    },
    Triangle {
        vertices: [Vertex; 3],
        color: Color,
    },
}

impl Shape {
    /// The diffuse color of the shape.
    pub fn color(&self) -> Color {
        match self {
            Shape::Sphere { color, .. }
            | Shape::Plane { color, .. }
            | Shape::Triangle { color, .. } => *color,
        }
    }
}

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LightSource {
    /// Infinitely distant light shining from `direction`.
    Sun { direction: Vec3, color: Color },
    /// Point light with inverse-square falloff.
    Bulb { position: Vec3, color: Color },
}

/// Camera overrides. Missing fields fall back to the renderer's default camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraDesc {
    pub eye: Option<Vec3>,
    pub forward: Option<Vec3>,
    pub up: Option<Vec3>,
}

impl CameraDesc {
    /// True if no camera field was set.
    pub fn is_default(&self) -> bool {
        self.eye.is_none() && self.forward.is_none() && self.up.is_none()
    }
}

/// What a ray that escapes the scene sees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BackgroundDesc {
    Flat(Color),
    /// Vertical blend from white (down) to the given color (up).
    Gradient(Color),
}

impl Default for BackgroundDesc {
    fn default() -> Self {
        BackgroundDesc::Gradient(DEFAULT_SKY)
    }
}

/// Output image settings (`png width height file`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDesc {
    pub width: u32,
    pub height: u32,
    pub output: String,
}

/// Everything a scene file declares.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub image: Option<ImageDesc>,
    pub shapes: Vec<Shape>,
    pub lights: Vec<LightSource>,
    pub camera: CameraDesc,
    pub background: BackgroundDesc,
}

impl SceneDescription {
    /// Create an empty description with the default sky.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shapes in the description.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Number of lights in the description.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
