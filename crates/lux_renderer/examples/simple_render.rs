//! Simple ray tracer example.
//!
//! Builds a small scene in code and saves it to PPM.

use std::sync::Arc;

use lux_renderer::{
    render, save, Background, Camera, Color, Diffuse, Light, Material, Plane, RenderConfig,
    Scene, Sphere, Triangle, Vec3,
};

fn main() {
    println!("lux - Simple Example");
    println!("====================");

    let scene = build_scene();
    let camera = Camera::look(Vec3::new(0.0, 0.5, 3.0), Vec3::new(0.0, -0.15, -1.0), Vec3::Y);
    let config = RenderConfig {
        max_depth: 3,
        ..Default::default()
    };

    println!("Rendering 640x360 @ depth {} on {} workers...", config.max_depth, config.workers);

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, 640, 360, &config).expect("Render failed");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn diffuse(r: f32, g: f32, b: f32) -> Arc<dyn Material> {
    Arc::new(Diffuse::new(Color::new(r, g, b)))
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(Background::Gradient(Color::new(0.5, 0.7, 1.0)));

    // Ground
    scene.add_object(Box::new(Plane::from_coefficients(0.0, 1.0, 0.0, 1.0, diffuse(0.5, 0.5, 0.5))));

    scene.add_object(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 1.0, diffuse(0.8, 0.3, 0.3))));
    scene.add_object(Box::new(Sphere::new(Vec3::new(-2.2, -0.4, -1.5), 0.6, diffuse(0.3, 0.8, 0.3))));
    scene.add_object(Box::new(Sphere::new(Vec3::new(2.2, -0.4, -1.5), 0.6, diffuse(0.3, 0.3, 0.8))));

    scene.add_object(Box::new(Triangle::new(
        Vec3::new(-1.0, -1.0, -3.0),
        Vec3::new(1.0, -1.0, -3.0),
        Vec3::new(0.0, 1.5, -3.5),
        diffuse(0.9, 0.8, 0.2),
    )));

    scene.add_light(Light::sun(Vec3::new(1.0, 1.0, 1.0), Color::new(0.9, 0.9, 0.8)));
    scene.add_light(Light::bulb(Vec3::new(-1.5, 1.5, 0.5), Color::new(0.6, 0.6, 1.0)));

    scene
}
