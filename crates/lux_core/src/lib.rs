//! Lux Core - renderer-agnostic scene description.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `Shape`, `LightSource`
//! - **Scene files**: a line-oriented text format and its parser
//!
//! # Example
//!
//! ```ignore
//! use lux_core::load_scene;
//!
//! let description = load_scene("scene.txt")?;
//! println!("Loaded {} shapes, {} lights",
//!     description.shapes.len(),
//!     description.lights.len());
//! ```

pub mod description;
pub mod parser;

// Re-export commonly used types
pub use description::{
    BackgroundDesc, CameraDesc, ImageDesc, LightSource, SceneDescription, Shape, Vertex,
};
pub use parser::{load_scene, parse_scene, ParseError, ParseResult, SceneParser};
