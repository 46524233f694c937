mod cli;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use lux_core::load_scene;
use lux_renderer::{render, save, Camera, RenderConfig, Scene};

use cli::Args;

/// Load render settings from a JSON file, or use defaults.
fn load_config(path: Option<&str>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };

    let text = fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path))?;
    let config = serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path))?;
    log::info!("Loaded render config from {}", path);
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let description =
        load_scene(&args.scene).with_context(|| format!("Failed to load scene {}", args.scene))?;
    log::info!(
        "Loaded {}: {} shapes, {} lights",
        args.scene,
        description.shape_count(),
        description.light_count()
    );

    let settings = args.settings(description.image.as_ref());
    let config = args.apply(load_config(args.config.as_deref())?);

    let scene = Scene::from_description(&description);
    let camera = Camera::from_description(&description.camera);

    let image = render(&camera, &scene, settings.width, settings.height, &config)
        .context("Render failed")?;

    save(&image, &settings.output)
        .with_context(|| format!("Failed to write {}", settings.output))?;

    Ok(())
}
