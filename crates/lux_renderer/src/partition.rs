//! Row partitioning for parallel rendering.
//!
//! The image is cut into contiguous row bands, one per worker. Bands never
//! overlap, so workers write the output buffer without synchronization.

use std::ops::Range;

/// Split `height` rows into `workers` contiguous ranges.
///
/// Every range but the last holds `height / workers` rows; the last absorbs
/// the remainder. `workers` is clamped to `[1, height]`, and an empty image
/// yields no ranges.
pub fn partition_rows(height: u32, workers: usize) -> Vec<Range<u32>> {
    if height == 0 {
        return Vec::new();
    }

    let count = workers.clamp(1, height as usize) as u32;
    let chunk = height / count;

    (0..count)
        .map(|i| {
            let start = i * chunk;
            let end = if i == count - 1 { height } else { start + chunk };
            start..end
        })
        .collect()
}
