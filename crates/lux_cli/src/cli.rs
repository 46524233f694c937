use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lux_core::ImageDesc;
use lux_renderer::RenderConfig;

pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_OUTPUT: &str = "output.ppm";

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lux")]
#[command(about = "A recursive CPU ray tracer")]
pub struct Args {
    /// Scene description file
    pub scene: String,

    /// Output image (.ppm, or any format the image crate can write)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of worker threads
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Maximum recursion depth (1 = direct lighting only)
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// JSON file with render settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}

/// Final image settings after applying overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub output: String,
}

impl Args {
    /// Flags win over the scene's `png` line, which wins over defaults.
    pub fn settings(&self, image: Option<&ImageDesc>) -> Settings {
        Settings {
            width: self
                .width
                .or(image.map(|i| i.width))
                .unwrap_or(DEFAULT_WIDTH),
            height: self
                .height
                .or(image.map(|i| i.height))
                .unwrap_or(DEFAULT_HEIGHT),
            output: self
                .output
                .clone()
                .or_else(|| image.map(|i| i.output.clone()))
                .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
        }
    }

    /// Apply `--threads` and `--max-depth` on top of a base config.
    pub fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(threads) = self.threads {
            config.workers = threads.max(1);
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = depth;
        }
        config
    }
}
