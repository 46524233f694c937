//! Scene file parser.
//!
//! Scene files are line oriented. Each non-empty line that does not start
//! with `#` is a command followed by whitespace-separated arguments.
//!
//! # Supported Commands
//!
//! - `png <width> <height> <file>`
//! - `color <r> <g> <b>` (applies to later shapes and lights)
//! - `sphere <x> <y> <z> <radius>`
//! - `plane <A> <B> <C> <D>` (`Ax + By + Cz + D = 0`)
//! - `normal <x> <y> <z>` (attached to later vertices)
//! - `xyz <x> <y> <z>` / `v <x> <y> <z>`
//! - `trif <i> <j> <k>` / `f <i> <j> <k>` (1-based, negative counts from the end)
//! - `sun <x> <y> <z>`, `bulb <x> <y> <z>`
//! - `eye`, `forward`, `up <x> <y> <z>`
//! - `background <r> <g> <b>` (flat), `sky <r> <g> <b>` (gradient)

use std::path::Path;

use lux_math::{Color, Vec3, WHITE};
use thiserror::Error;

use crate::description::{
    BackgroundDesc, ImageDesc, LightSource, SceneDescription, Shape, Vertex,
};

/// Errors that can occur while reading a scene file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Stateful scene parser.
///
/// Tracks the current color, the current normal and the vertex list while
/// walking the file top to bottom.
pub struct SceneParser {
    scene: SceneDescription,
    vertices: Vec<Vertex>,
    current_color: Color,
    current_normal: Option<Vec3>,
    line: usize,
}

impl SceneParser {
    /// Create a parser with white as the current color.
    pub fn new() -> Self {
        Self {
            scene: SceneDescription::new(),
            vertices: Vec::new(),
            current_color: WHITE,
            current_normal: None,
            line: 0,
        }
    }

    /// Parse the whole file and return the description.
    pub fn parse(mut self, content: &str) -> ParseResult<SceneDescription> {
        for (index, raw) in content.lines().enumerate() {
            self.line = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            self.parse_command(&tokens)?;
        }

        log::info!(
            "Parsed scene: {} shapes, {} lights, {} vertices",
            self.scene.shape_count(),
            self.scene.light_count(),
            self.vertices.len()
        );
        Ok(self.scene)
    }

    fn parse_command(&mut self, tokens: &[&str]) -> ParseResult<()> {
        let (command, args) = match tokens.split_first() {
            Some(split) => split,
            None => return Ok(()),
        };

        match *command {
            "png" => self.parse_png(args),
            "color" => {
                self.current_color = self.vec3(command, args)?;
                Ok(())
            }
            "sphere" => {
                let [x, y, z, r] = self.floats::<4>(command, args)?;
                self.scene.shapes.push(Shape::Sphere {
                    center: Vec3::new(x, y, z),
                    radius: r,
                    color: self.current_color,
                });
                Ok(())
            }
            "plane" => {
                let coefficients = self.floats::<4>(command, args)?;
                self.scene.shapes.push(Shape::Plane {
                    coefficients,
                    color: self.current_color,
                });
                Ok(())
            }
            "normal" => {
                self.current_normal = Some(self.vec3(command, args)?);
                Ok(())
            }
            "xyz" | "v" => {
                let point = self.vec3(command, args)?;
                self.vertices.push(Vertex {
                    point,
                    normal: self.current_normal,
                });
                Ok(())
            }
            "trif" | "f" => self.parse_triangle(command, args),
            "sun" => {
                let direction = self.vec3(command, args)?;
                self.scene.lights.push(LightSource::Sun {
                    direction,
                    color: self.current_color,
                });
                Ok(())
            }
            "bulb" => {
                let position = self.vec3(command, args)?;
                self.scene.lights.push(LightSource::Bulb {
                    position,
                    color: self.current_color,
                });
                Ok(())
            }
            "eye" => {
                self.scene.camera.eye = Some(self.vec3(command, args)?);
                Ok(())
            }
            "forward" => {
                self.scene.camera.forward = Some(self.vec3(command, args)?);
                Ok(())
            }
            "up" => {
                self.scene.camera.up = Some(self.vec3(command, args)?);
                Ok(())
            }
            "background" => {
                self.scene.background = BackgroundDesc::Flat(self.vec3(command, args)?);
                Ok(())
            }
            "sky" => {
                self.scene.background = BackgroundDesc::Gradient(self.vec3(command, args)?);
                Ok(())
            }
            other => {
                log::warn!("Unsupported command '{}' at line {}", other, self.line);
                Ok(())
            }
        }
    }

    fn parse_png(&mut self, args: &[&str]) -> ParseResult<()> {
        if args.len() != 3 {
            return Err(self.error(format!(
                "png expects <width> <height> <file>, got {} arguments",
                args.len()
            )));
        }
        let width = self.parse_u32(args[0])?;
        let height = self.parse_u32(args[1])?;
        self.scene.image = Some(ImageDesc {
            width,
            height,
            output: args[2].to_string(),
        });
        Ok(())
    }

    fn parse_triangle(&mut self, command: &str, args: &[&str]) -> ParseResult<()> {
        self.expect_arity(command, args, 3)?;
        // OBJ faces may carry texture/normal indices ("1/2/3"); only the
        // position index is used.
        let mut vertices = [Vertex::new(Vec3::ZERO); 3];
        for (slot, arg) in vertices.iter_mut().zip(args) {
            let index_str = arg.split('/').next().unwrap_or(*arg);
            let index: i64 = index_str
                .parse()
                .map_err(|_| self.error(format!("invalid vertex index '{}'", arg)))?;
            *slot = self.vertex(index)?;
        }
        self.scene.shapes.push(Shape::Triangle {
            vertices,
            color: self.current_color,
        });
        Ok(())
    }

    /// Resolve a 1-based (or negative, end-relative) vertex index.
    fn vertex(&self, index: i64) -> ParseResult<Vertex> {
        let len = self.vertices.len() as i64;
        let resolved = if index < 0 { len + index } else { index - 1 };
        if index == 0 || resolved < 0 || resolved >= len {
            return Err(self.error(format!(
                "vertex index {} out of range ({} vertices declared)",
                index, len
            )));
        }
        Ok(self.vertices[resolved as usize])
    }

    fn vec3(&self, command: &str, args: &[&str]) -> ParseResult<Vec3> {
        let [x, y, z] = self.floats::<3>(command, args)?;
        Ok(Vec3::new(x, y, z))
    }

    fn floats<const N: usize>(&self, command: &str, args: &[&str]) -> ParseResult<[f32; N]> {
        self.expect_arity(command, args, N)?;
        let mut values = [0.0; N];
        for (value, arg) in values.iter_mut().zip(args) {
            *value = arg
                .parse()
                .map_err(|_| self.error(format!("invalid number '{}' for {}", arg, command)))?;
        }
        Ok(values)
    }

    fn parse_u32(&self, arg: &str) -> ParseResult<u32> {
        arg.parse()
            .map_err(|_| self.error(format!("invalid integer '{}'", arg)))
    }

    fn expect_arity(&self, command: &str, args: &[&str], expected: usize) -> ParseResult<()> {
        if args.len() != expected {
            return Err(self.error(format!(
                "{} expects {} arguments, got {}",
                command,
                expected,
                args.len()
            )));
        }
        Ok(())
    }

    fn error(&self, message: String) -> ParseError {
        ParseError::Parse {
            line: self.line,
            message,
        }
    }
}

impl Default for SceneParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse scene file contents.
pub fn parse_scene(content: &str) -> ParseResult<SceneDescription> {
    SceneParser::new().parse(content)
}

/// Read and parse a scene file from disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> ParseResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_scene(&content)
}
