//! Pixel adjustment operators.
//!
//! Each operator is a small parameter struct with an `apply` method mapping one
//! working pixel to another. Operators never touch alpha and return their
//! input untouched when their parameters are neutral. They do not clamp;
//! keeping values inside the working range is the executor's job.

use crate::adjustments::REFERENCE_KELVIN;
use crate::color::{linear_to_srgb, luma, smoothstep, srgb_to_linear, WorkingPixel};

/// Mid-gray pivot for contrast.
const MIDPOINT: f32 = 0.5;

/// Tint units that remove all green.
const TINT_RANGE: f32 = 5000.0;

/// Black point shift at full slider travel.
const BLACK_POINT_RANGE: f32 = 0.2;

/// Lowest luma that brilliance will rescale.
const BRILLIANCE_MIN_LUMA: f32 = 1e-4;

/// Exposure in stops, applied in linear light.
///
/// Formula: `linear(output) = linear(input) * 2^ev`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureAdjust {
    pub ev: f32,
    gain: f32,
}

impl ExposureAdjust {
    pub fn new(ev: f32) -> Self {
        Self {
            ev,
            gain: 2.0_f32.powf(ev),
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.ev == 0.0
    }

    #[inline]
    pub fn apply(&self, px: WorkingPixel) -> WorkingPixel {
        if self.is_neutral() {
            return px;
        }
        let scale = |c: f32| linear_to_srgb(srgb_to_linear(c) * self.gain);
        [scale(px[0]), scale(px[1]), scale(px[2]), px[3]]
    }
}

/// Brightness, contrast and saturation in one operator.
///
/// Applied in that order:
/// - `c = c + brightness`
/// - `c = (c - 0.5) * contrast + 0.5`
/// - `c = luma + (c - luma) * saturation`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorControls {
    /// Additive offset, neutral 0.0.
    pub brightness: f32,
    /// Factor around mid-gray, neutral 1.0.
    pub contrast: f32,
    /// Factor around luma, neutral 1.0.
    pub saturation: f32,
}

impl ColorControls {
    pub const NEUTRAL: ColorControls = ColorControls {
        brightness: 0.0,
        contrast: 1.0,
        saturation: 1.0,
    };

    pub fn new(brightness: f32, contrast: f32, saturation: f32) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    #[inline]
    pub fn apply(&self, px: WorkingPixel) -> WorkingPixel {
        let [mut r, mut g, mut b, a] = px;

        if self.brightness != 0.0 {
            r += self.brightness;
            g += self.brightness;
            b += self.brightness;
        }

        if self.contrast != 1.0 {
            r = (r - MIDPOINT) * self.contrast + MIDPOINT;
            g = (g - MIDPOINT) * self.contrast + MIDPOINT;
            b = (b - MIDPOINT) * self.contrast + MIDPOINT;
        }

        if self.saturation != 1.0 {
            (r, g, b) = scale_chroma(r, g, b, self.saturation);
        }

        [r, g, b, a]
    }
}

/// Tone remap restricted to the shadows and the highlights.
///
/// Shadows get a brightness offset weighted by how dark the pixel is;
/// highlights get a contrast factor weighted by how bright it is. Both weights
/// come from the input pixel's luma and fall to zero at mid-gray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightShadow {
    /// Brightness offset for dark tones, neutral 0.0.
    pub shadow_amount: f32,
    /// Contrast factor for bright tones, neutral 1.0.
    pub highlight_amount: f32,
}

impl HighlightShadow {
    pub fn new(shadow_amount: f32, highlight_amount: f32) -> Self {
        Self {
            shadow_amount,
            highlight_amount,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.shadow_amount == 0.0 && self.highlight_amount == 1.0
    }

    #[inline]
    pub fn apply(&self, px: WorkingPixel) -> WorkingPixel {
        if self.is_neutral() {
            return px;
        }
        let [mut r, mut g, mut b, a] = px;
        let lum = luma(r, g, b);

        // 1 for deep shadows, 0 from mid-gray up
        let shadow_weight = smoothstep(0.5, 0.0, lum);
        if shadow_weight > 0.0 {
            let lift = self.shadow_amount * shadow_weight;
            r += lift;
            g += lift;
            b += lift;
        }

        // 1 for pure white, 0 from mid-gray down
        let highlight_weight = smoothstep(0.5, 1.0, lum);
        if highlight_weight > 0.0 {
            let remap = |c: f32| {
                let contrasted = (c - MIDPOINT) * self.highlight_amount + MIDPOINT;
                c + (contrasted - c) * highlight_weight
            };
            r = remap(r);
            g = remap(g);
            b = remap(b);
        }

        [r, g, b, a]
    }
}

/// White balance toward a target neutral temperature and tint.
///
/// The image's neutral is treated as lit at `temperature_kelvin` and corrected
/// back to the 6500 K reference, so a higher target warms the image. Positive
/// tint pulls green out (toward magenta).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhiteBalance {
    pub temperature_kelvin: f32,
    pub tint: f32,
    gains: [f32; 3],
}

impl WhiteBalance {
    pub fn new(temperature_kelvin: f32, tint: f32) -> Self {
        let reference = kelvin_to_rgb(REFERENCE_KELVIN);
        let target = kelvin_to_rgb(temperature_kelvin);

        // Gains relative to green so overall brightness stays put
        let green = reference[1] / target[1].max(1e-3);
        let mut gains = [
            reference[0] / target[0].max(1e-3) / green,
            1.0,
            reference[2] / target[2].max(1e-3) / green,
        ];
        gains[1] *= 1.0 - tint / TINT_RANGE;

        Self {
            temperature_kelvin,
            tint,
            gains,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.temperature_kelvin == REFERENCE_KELVIN && self.tint == 0.0
    }

    /// Per-channel multipliers this operator applies.
    pub fn gains(&self) -> [f32; 3] {
        self.gains
    }

    #[inline]
    pub fn apply(&self, px: WorkingPixel) -> WorkingPixel {
        if self.is_neutral() {
            return px;
        }
        [
            px[0] * self.gains[0],
            px[1] * self.gains[1],
            px[2] * self.gains[2],
            px[3],
        ]
    }
}

/// Approximate the RGB color of a black-body light source.
///
/// Tanner Helland's fit to the Planckian locus, valid from 1000 K to 40000 K
/// (inputs are clamped to that range). Returns channels in 0.0 to 1.0.
#[allow(clippy::excessive_precision)] // Published fit constants
pub fn kelvin_to_rgb(kelvin: f32) -> [f32; 3] {
    let temp = (kelvin / 100.0).clamp(10.0, 400.0);

    let (r, g, b) = if temp <= 66.0 {
        let r = 255.0;
        let g = 99.4708025861 * temp.ln() - 161.1195681661;
        let b = if temp <= 19.0 {
            0.0
        } else {
            138.5177312231 * (temp - 10.0).ln() - 305.0447927307
        };
        (r, g, b)
    } else {
        let r = 329.698727446 * (temp - 60.0).powf(-0.1332047592);
        let g = 288.1221695283 * (temp - 60.0).powf(-0.0755148492);
        (r, g, 255.0)
    };

    [
        r.clamp(0.0, 255.0) / 255.0,
        g.clamp(0.0, 255.0) / 255.0,
        b.clamp(0.0, 255.0) / 255.0,
    ]
}

/// Black point, brilliance and vibrance.
///
/// - Black point remaps `c = (c - bp) / (1 - bp)` with `bp = black_point * 0.2`;
///   positive values crush shadows, negative values lift them.
/// - Brilliance raises luma to the power `2^-brilliance` and rescales RGB to
///   match, lifting midtones without moving black or white.
/// - Vibrance saturates muted colors more than saturated ones and goes easy on
///   skin tones.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Finish {
    pub black_point: f32,
    pub brilliance: f32,
    pub vibrance: f32,
}

impl Finish {
    pub fn new(black_point: f32, brilliance: f32, vibrance: f32) -> Self {
        Self {
            black_point,
            brilliance,
            vibrance,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.black_point == 0.0 && self.brilliance == 0.0 && self.vibrance == 0.0
    }

    #[inline]
    pub fn apply(&self, px: WorkingPixel) -> WorkingPixel {
        if self.is_neutral() {
            return px;
        }
        let [mut r, mut g, mut b, a] = px;

        if self.black_point != 0.0 {
            let bp = self.black_point * BLACK_POINT_RANGE;
            let remap = |c: f32| (c - bp) / (1.0 - bp);
            r = remap(r);
            g = remap(g);
            b = remap(b);
        }

        if self.brilliance != 0.0 {
            let lum = luma(r, g, b);
            if lum > BRILLIANCE_MIN_LUMA {
                let target = lum.powf(2.0_f32.powf(-self.brilliance));
                let scale = target / lum;
                r *= scale;
                g *= scale;
                b *= scale;
            }
        }

        if self.vibrance != 0.0 {
            let max_c = r.max(g).max(b);
            let min_c = r.min(g).min(b);
            let current_sat = if max_c > 0.0 {
                ((max_c - min_c) / max_c).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let is_skin = r > g && g > b && (r - g) > 0.06;
            let skin_protection = if is_skin { 0.5 } else { 1.0 };
            let factor = 1.0 + self.vibrance * (1.0 - current_sat) * skin_protection;
            (r, g, b) = scale_chroma(r, g, b, factor);
        }

        [r, g, b, a]
    }
}

/// Scale each channel's distance from luma by `factor`.
#[inline]
fn scale_chroma(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    let gray = luma(r, g, b);
    (
        gray + (r - gray) * factor,
        gray + (g - gray) * factor,
        gray + (b - gray) * factor,
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating working pixels inside the working range.
    fn pixel_strategy() -> impl Strategy<Value = WorkingPixel> {
        (0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0)
            .prop_map(|(r, g, b, a)| [r, g, b, a])
    }

    /// Strategy for a normalized slider value (-1.0 to 1.0).
    fn unit_strategy() -> impl Strategy<Value = f32> {
        -1.0f32..=1.0
    }

    fn all_finite(px: WorkingPixel) -> bool {
        px.iter().all(|c| c.is_finite())
    }

    proptest! {
        /// Property: exposure over the slider range stays finite and keeps alpha.
        #[test]
        fn prop_exposure_finite(p in pixel_strategy(), s in unit_strategy()) {
            let out = ExposureAdjust::new(s * 2.0).apply(p);
            prop_assert!(all_finite(out));
            prop_assert_eq!(out[3], p[3]);
        }

        /// Property: saturation never moves luma.
        #[test]
        fn prop_saturation_preserves_luma(p in pixel_strategy(), s in unit_strategy()) {
            let out = ColorControls::new(0.0, 1.0, s + 1.0).apply(p);
            let before = luma(p[0], p[1], p[2]);
            let after = luma(out[0], out[1], out[2]);
            prop_assert!((before - after).abs() < 1e-4);
        }

        /// Property: highlight/shadow stays finite and keeps alpha.
        #[test]
        fn prop_highlight_shadow_finite(
            p in pixel_strategy(),
            shadows in unit_strategy(),
            highlights in unit_strategy(),
        ) {
            let out = HighlightShadow::new(shadows, highlights + 1.0).apply(p);
            prop_assert!(all_finite(out));
            prop_assert_eq!(out[3], p[3]);
        }

        /// Property: white balance gains are positive over the slider range.
        #[test]
        fn prop_white_balance_gains_positive(warmth in unit_strategy(), tint in unit_strategy()) {
            let wb = WhiteBalance::new(REFERENCE_KELVIN + warmth * 1000.0, tint * 1000.0);
            for gain in wb.gains() {
                prop_assert!(gain.is_finite() && gain > 0.0);
            }
        }

        /// Property: finish stays finite and keeps alpha.
        #[test]
        fn prop_finish_finite(
            p in pixel_strategy(),
            black_point in unit_strategy(),
            brilliance in unit_strategy(),
            vibrance in unit_strategy(),
        ) {
            let out = Finish::new(black_point, brilliance, vibrance).apply(p);
            prop_assert!(all_finite(out));
            prop_assert_eq!(out[3], p[3]);
        }
    }
}
