//! Row-major pixel buffer for render output.

use std::ops::Range;

use lux_math::{color_to_rgb8, Color, BLACK};

/// Simple image buffer for storing render output.
///
/// Indexed as (row, col); out-of-range indices panic.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; width as usize * height as usize],
        }
    }

    /// Get the pixel at (row, col).
    pub fn get(&self, row: u32, col: u32) -> Color {
        self.pixels[self.index(row, col)]
    }

    /// Set the pixel at (row, col).
    pub fn set_pixel(&mut self, row: u32, col: u32, color: Color) {
        let index = self.index(row, col);
        self.pixels[index] = color;
    }

    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Split the buffer into disjoint mutable bands, one per row range.
    ///
    /// `partitions` must be contiguous, start at row 0 and end at or before
    /// `height`, as produced by [`crate::partition_rows`].
    pub fn row_bands_mut(&mut self, partitions: &[Range<u32>]) -> Vec<RowBand<'_>> {
        let width = self.width;
        let mut rest: &mut [Color] = &mut self.pixels;
        let mut bands = Vec::with_capacity(partitions.len());
        let mut next_row = 0;

        for rows in partitions {
            debug_assert_eq!(rows.start, next_row, "row partitions must be contiguous");
            let len = (rows.end - rows.start) as usize * width as usize;
            let (pixels, tail) = std::mem::take(&mut rest).split_at_mut(len);
            bands.push(RowBand {
                rows: rows.clone(),
                width,
                pixels,
            });
            rest = tail;
            next_row = rows.end;
        }

        bands
    }

    /// Convert to packed 8-bit RGB bytes (for saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Exclusive view of a contiguous range of image rows.
pub struct RowBand<'a> {
    pub rows: Range<u32>,
    width: u32,
    pixels: &'a mut [Color],
}

impl RowBand<'_> {
    /// Set a pixel by its absolute image row.
    pub fn set_pixel(&mut self, row: u32, col: u32, color: Color) {
        let local = (row - self.rows.start) as usize * self.width as usize + col as usize;
        self.pixels[local] = color;
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition_rows;

    #[test]
    fn test_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        image.set_pixel(2, 1, Color::ONE);

        assert_eq!(image.get(2, 1), Color::ONE);
        assert_eq!(image.get(1, 2), BLACK);
        assert_eq!(image.pixels[2 * 4 + 1], Color::ONE);
    }

    #[test]
    fn test_row_bands_write_disjoint_rows() {
        let mut image = ImageBuffer::new(3, 7);
        let partitions = partition_rows(7, 3);

        for (i, mut band) in image.row_bands_mut(&partitions).into_iter().enumerate() {
            for row in band.rows.clone() {
                for col in 0..band.width() {
                    band.set_pixel(row, col, Color::splat(i as f32));
                }
            }
        }

        for row in 0..7 {
            let expected = partitions.iter().position(|r| r.contains(&row)).unwrap();
            for col in 0..3 {
                assert_eq!(image.get(row, col), Color::splat(expected as f32));
            }
        }
    }

    #[test]
    fn test_to_rgb8() {
        let mut image = ImageBuffer::new(2, 1);
        image.set_pixel(0, 0, Color::new(1.0, 0.0, 0.5));
        image.set_pixel(0, 1, Color::new(2.0, -1.0, 0.0));

        assert_eq!(image.to_rgb8(), vec![255, 0, 127, 255, 0, 0]);
    }
}
