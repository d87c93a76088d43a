//! Color space utilities shared by the adjustment operators.
//!
//! Storage pixels are 8-bit sRGB-encoded channels. Operators work on
//! [`WorkingPixel`]s: the same encoded values as `f32` in the range 0.0 to 1.0,
//! with alpha carried in the fourth lane. Exposure additionally round-trips
//! through linear light using the sRGB transfer functions below.

/// RGBA pixel in working space (0.0 to 1.0 per channel).
pub type WorkingPixel = [f32; 4];

/// ITU-R BT.709 coefficient for red channel in luminance calculation.
pub const LUMA_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for green channel in luminance calculation.
pub const LUMA_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for blue channel in luminance calculation.
pub const LUMA_B: f32 = 0.0722;

/// Convert a 3- or 4-channel storage pixel to working space.
///
/// RGB pixels get an opaque alpha of 1.0. Any channels beyond the fourth are
/// ignored.
#[inline]
pub fn to_working(channels: &[u8]) -> WorkingPixel {
    let alpha = channels.get(3).map_or(1.0, |&a| a as f32 / 255.0);
    [
        channels[0] as f32 / 255.0,
        channels[1] as f32 / 255.0,
        channels[2] as f32 / 255.0,
        alpha,
    ]
}

/// Convert a working pixel back to 8-bit RGBA storage.
///
/// Values are clamped to 0.0..=1.0 before quantizing, so out-of-gamut results
/// saturate instead of wrapping. NaN maps to 0.
#[inline]
pub fn to_storage(pixel: WorkingPixel) -> [u8; 4] {
    [
        quantize(pixel[0]),
        quantize(pixel[1]),
        quantize(pixel[2]),
        quantize(pixel[3]),
    ]
}

#[inline]
fn quantize(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Clamp the color channels of a working pixel into 0.0..=1.0.
#[inline]
pub fn clamp_working(pixel: WorkingPixel) -> WorkingPixel {
    [
        pixel[0].clamp(0.0, 1.0),
        pixel[1].clamp(0.0, 1.0),
        pixel[2].clamp(0.0, 1.0),
        pixel[3].clamp(0.0, 1.0),
    ]
}

/// Relative luminance of the color channels using BT.709 weights.
#[inline]
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Decode an sRGB-encoded value to linear light (IEC 61966-2-1).
#[inline]
pub fn srgb_to_linear(encoded: f32) -> f32 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear-light value with the sRGB transfer curve.
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    if linear <= 0.003_130_8 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Smooth Hermite interpolation.
///
/// Returns 0 for x at `edge0`, 1 for x at `edge1`, and interpolates smoothly
/// between. The edges may be given in descending order to get a falling ramp.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
