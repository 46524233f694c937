//! Scene: objects, lights and background.

use std::collections::HashMap;
use std::sync::Arc;

use lux_core::{BackgroundDesc, SceneDescription, Shape};
use lux_math::{Color, Interval, Vec3, WHITE};

use crate::{
    Diffuse, HitRecord, Intersectable, IntersectableList, Light, Material, Plane, Ray, Sphere,
    Triangle,
};

/// What a ray that escapes the scene sees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    Flat(Color),
    /// Blend from white (looking down) to the base color (looking up).
    Gradient(Color),
}

impl Background {
    /// Color seen along `ray` when it hits nothing.
    pub fn color(&self, ray: &Ray) -> Color {
        match self {
            Background::Flat(color) => *color,
            Background::Gradient(base) => {
                let unit = ray.direction().normalize();
                let a = 0.5 * (unit.y + 1.0);
                WHITE * (1.0 - a) + *base * a
            }
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        BackgroundDesc::default().into()
    }
}

impl From<BackgroundDesc> for Background {
    fn from(desc: BackgroundDesc) -> Self {
        match desc {
            BackgroundDesc::Flat(color) => Background::Flat(color),
            BackgroundDesc::Gradient(color) => Background::Gradient(color),
        }
    }
}

/// A renderable scene.
///
/// Read-only while a render is running.
pub struct Scene {
    pub objects: IntersectableList,
    pub lights: Vec<Light>,
    pub background: Background,
}

impl Scene {
    /// Create an empty scene with the given background.
    pub fn new(background: Background) -> Self {
        Self {
            objects: IntersectableList::new(),
            lights: Vec::new(),
            background,
        }
    }

    pub fn add_object(&mut self, object: Box<dyn Intersectable>) {
        self.objects.add(object);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Nearest hit along `ray` within `ray_t`.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        self.objects.intersect(ray, ray_t)
    }

    /// Build renderable primitives from a scene description.
    ///
    /// Shapes declared with the same color share one material.
    pub fn from_description(desc: &SceneDescription) -> Self {
        let mut scene = Scene::new(desc.background.into());
        let mut materials = MaterialCache::default();

        for shape in &desc.shapes {
            let material = materials.diffuse(shape.color());
            let object: Box<dyn Intersectable> = match shape {
                Shape::Sphere { center, radius, .. } => {
                    Box::new(Sphere::new(*center, *radius, material))
                }
                Shape::Plane { coefficients, .. } => {
                    let [a, b, c, d] = *coefficients;
                    Box::new(Plane::from_coefficients(a, b, c, d, material))
                }
                Shape::Triangle { vertices, .. } => {
                    Box::new(Triangle::from_vertices(*vertices, material))
                }
            };
            scene.add_object(object);
        }

        for light in &desc.lights {
            scene.add_light((*light).into());
        }

        log::debug!(
            "Built scene: {} objects, {} lights, {} materials",
            scene.objects.len(),
            scene.lights.len(),
            materials.len()
        );
        scene
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Background::default())
    }
}

/// One shared diffuse material per distinct color.
#[derive(Default)]
struct MaterialCache {
    by_color: HashMap<[u32; 3], Arc<dyn Material>>,
}

impl MaterialCache {
    fn diffuse(&mut self, color: Color) -> Arc<dyn Material> {
        let key = color.to_array().map(f32::to_bits);
        self.by_color
            .entry(key)
            .or_insert_with(|| Arc::new(Diffuse::new(color)) as Arc<dyn Material>)
            .clone()
    }

    fn len(&self) -> usize {
        self.by_color.len()
    }
}
