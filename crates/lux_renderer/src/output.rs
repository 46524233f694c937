//! Image encoders.
//!
//! `.ppm` files are written as plain-text P3, anything else goes through
//! the `image` crate (PNG, JPEG, ...) chosen by extension.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lux_math::color_to_rgb8;
use thiserror::Error;

use crate::ImageBuffer;

/// Largest channel value in the PPM header.
const PPM_MAX_VALUE: u8 = 255;

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Write the image as plain-text PPM (P3), one image row per line.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> OutputResult<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "{}", PPM_MAX_VALUE)?;

    for row in 0..image.height {
        let line: Vec<String> = (0..image.width)
            .map(|col| {
                let [r, g, b] = color_to_rgb8(image.get(row, col));
                format!("{} {} {}", r, g, b)
            })
            .collect();
        writeln!(writer, "{}", line.join("  "))?;
    }

    writer.flush()?;
    Ok(())
}

/// Save the image, picking the encoder from the file extension.
pub fn save<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("ppm"))
        .unwrap_or(false);

    if is_ppm {
        let writer = BufWriter::new(File::create(path)?);
        write_ppm(image, writer)?;
    } else {
        let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8()).ok_or(
            OutputError::BufferSize {
                width: image.width,
                height: image.height,
            },
        )?;
        rgb.save(path)?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
