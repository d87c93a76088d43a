//! Whole-image statistics.
//!
//! Used to measure what an adjustment did: average luminance and average
//! saturation across every pixel, plus a per-pixel hue helper.

use crate::color::{luma, to_working};
use crate::raster::Raster;

/// Averages over every pixel of an image.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImageStats {
    /// Mean BT.709 luma (0.0 to 1.0).
    pub mean_luma: f32,
    /// Mean HSV saturation (0.0 to 1.0).
    pub mean_saturation: f32,
}

/// Compute mean luma and saturation of a raster.
///
/// Returns zeros for an empty or invalid raster.
pub fn compute_stats(image: &Raster) -> ImageStats {
    if image.validate().is_err() {
        return ImageStats::default();
    }

    let mut luma_sum = 0.0f64;
    let mut sat_sum = 0.0f64;
    let mut count = 0usize;

    for chunk in image.pixels().chunks_exact(image.channels() as usize) {
        let [r, g, b, _] = to_working(chunk);
        luma_sum += luma(r, g, b) as f64;
        sat_sum += saturation(r, g, b) as f64;
        count += 1;
    }

    if count == 0 {
        return ImageStats::default();
    }
    ImageStats {
        mean_luma: (luma_sum / count as f64) as f32,
        mean_saturation: (sat_sum / count as f64) as f32,
    }
}

/// HSV saturation of a normalized RGB triple.
#[inline]
pub fn saturation(r: f32, g: f32, b: f32) -> f32 {
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    if max_c > 0.0 {
        (max_c - min_c) / max_c
    } else {
        0.0
    }
}

/// HSV hue in degrees (0 to 360), or `None` for grays.
pub fn hue_degrees(r: f32, g: f32, b: f32) -> Option<f32> {
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    let delta = max_c - min_c;
    if delta <= f32::EPSILON {
        return None;
    }

    let sector = if max_c == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max_c == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    Some(sector * 60.0)
}

/// Smallest angle between two hues, in degrees.
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}
