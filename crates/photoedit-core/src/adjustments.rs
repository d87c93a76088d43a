//! Slider values and their normalized operator parameters.
//!
//! The UI works in slider units: eleven values, each in the range -100 to 100,
//! where 0 is neutral. [`NormalizedAdjustmentSet`] rescales them into the
//! domain each operator expects.
//!
//! ## Conventions
//!
//! | Slider      | Parameter            | Formula          | Neutral |
//! |-------------|----------------------|------------------|---------|
//! | Exposure    | `exposure_ev`        | s / 50           | 0.0     |
//! | Brightness  | `brightness`         | s / 100          | 0.0     |
//! | Contrast    | `contrast`           | s / 100 + 1      | 1.0     |
//! | Saturation  | `saturation`         | s / 100 + 1      | 1.0     |
//! | Shadows     | `shadow_amount`      | s / 100          | 0.0     |
//! | Highlights  | `highlight_amount`   | s / 100 + 1      | 1.0     |
//! | Warmth      | `temperature_kelvin` | 6500 + s * 10    | 6500.0  |
//! | Tint        | `tint`               | s * 10           | 0.0     |
//! | Black Point | `black_point`        | s / 100          | 0.0     |
//! | Brilliance  | `brilliance`         | s / 100          | 0.0     |
//! | Vibrance    | `vibrance`           | s / 100          | 0.0     |
//!
//! The `+ 1` on the multiplicative parameters makes slider 0 land on a factor
//! of 1.0.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Lowest accepted slider value.
pub const SLIDER_MIN: f32 = -100.0;

/// Highest accepted slider value.
pub const SLIDER_MAX: f32 = 100.0;

/// Reference white point for the warmth slider, in Kelvin.
pub const REFERENCE_KELVIN: f32 = 6500.0;

/// Kelvin (and tint units) per slider step for warmth and tint.
pub const WHITE_BALANCE_GAIN: f32 = 10.0;

/// Slider steps per stop of exposure.
const EXPOSURE_DIVISOR: f32 = 50.0;

/// One of the eleven adjustment sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slider {
    Exposure,
    Brilliance,
    Highlights,
    Shadows,
    Contrast,
    Brightness,
    BlackPoint,
    Saturation,
    Vibrance,
    Warmth,
    Tint,
}

impl Slider {
    /// All sliders in UI display order.
    pub const ALL: [Slider; 11] = [
        Slider::Exposure,
        Slider::Brilliance,
        Slider::Highlights,
        Slider::Shadows,
        Slider::Contrast,
        Slider::Brightness,
        Slider::BlackPoint,
        Slider::Saturation,
        Slider::Vibrance,
        Slider::Warmth,
        Slider::Tint,
    ];

    /// Identifier used in serialized sets (`exposure`, `blackPoint`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Slider::Exposure => "exposure",
            Slider::Brilliance => "brilliance",
            Slider::Highlights => "highlights",
            Slider::Shadows => "shadows",
            Slider::Contrast => "contrast",
            Slider::Brightness => "brightness",
            Slider::BlackPoint => "blackPoint",
            Slider::Saturation => "saturation",
            Slider::Vibrance => "vibrance",
            Slider::Warmth => "warmth",
            Slider::Tint => "tint",
        }
    }

    /// Human-readable label shown next to the slider.
    pub fn label(self) -> &'static str {
        match self {
            Slider::Exposure => "Exposure",
            Slider::Brilliance => "Brilliance",
            Slider::Highlights => "Highlights",
            Slider::Shadows => "Shadows",
            Slider::Contrast => "Contrast",
            Slider::Brightness => "Brightness",
            Slider::BlackPoint => "Black Point",
            Slider::Saturation => "Saturation",
            Slider::Vibrance => "Vibrance",
            Slider::Warmth => "Warmth",
            Slider::Tint => "Tint",
        }
    }
}

impl fmt::Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Slider values for one adjustment request (-100 to 100 each).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdjustmentSet {
    pub exposure: f32,
    pub brilliance: f32,
    pub highlights: f32,
    pub shadows: f32,
    pub contrast: f32,
    pub brightness: f32,
    pub black_point: f32,
    pub saturation: f32,
    pub vibrance: f32,
    pub warmth: f32,
    pub tint: f32,
}

impl AdjustmentSet {
    /// Create a new AdjustmentSet with every slider at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if every slider is at its neutral value
    pub fn is_neutral(&self) -> bool {
        Slider::ALL.iter().all(|&s| self.get(s) == 0.0)
    }

    /// Read a single slider value.
    pub fn get(&self, slider: Slider) -> f32 {
        match slider {
            Slider::Exposure => self.exposure,
            Slider::Brilliance => self.brilliance,
            Slider::Highlights => self.highlights,
            Slider::Shadows => self.shadows,
            Slider::Contrast => self.contrast,
            Slider::Brightness => self.brightness,
            Slider::BlackPoint => self.black_point,
            Slider::Saturation => self.saturation,
            Slider::Vibrance => self.vibrance,
            Slider::Warmth => self.warmth,
            Slider::Tint => self.tint,
        }
    }

    /// Write a single slider value. No range check is done here.
    pub fn set(&mut self, slider: Slider, value: f32) {
        let field = match slider {
            Slider::Exposure => &mut self.exposure,
            Slider::Brilliance => &mut self.brilliance,
            Slider::Highlights => &mut self.highlights,
            Slider::Shadows => &mut self.shadows,
            Slider::Contrast => &mut self.contrast,
            Slider::Brightness => &mut self.brightness,
            Slider::BlackPoint => &mut self.black_point,
            Slider::Saturation => &mut self.saturation,
            Slider::Vibrance => &mut self.vibrance,
            Slider::Warmth => &mut self.warmth,
            Slider::Tint => &mut self.tint,
        };
        *field = value;
    }

    /// Builder-style variant of [`AdjustmentSet::set`].
    pub fn with(mut self, slider: Slider, value: f32) -> Self {
        self.set(slider, value);
        self
    }

    /// Check every slider is a finite number within -100 to 100.
    ///
    /// Reports the first offending slider in display order.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        for slider in Slider::ALL {
            let value = self.get(slider);
            if !value.is_finite() || !(SLIDER_MIN..=SLIDER_MAX).contains(&value) {
                return Err(InvalidInput::SliderOutOfRange { slider, value });
            }
        }
        Ok(())
    }

    /// Copy with every slider clamped into -100 to 100.
    ///
    /// NaN becomes 0 and infinities saturate to the nearest bound.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for slider in Slider::ALL {
            let value = self.get(slider);
            let value = if value.is_nan() {
                0.0
            } else {
                value.clamp(SLIDER_MIN, SLIDER_MAX)
            };
            out.set(slider, value);
        }
        out
    }

    /// Rescale into operator parameters. Validates first.
    pub fn normalize(&self) -> Result<NormalizedAdjustmentSet, InvalidInput> {
        self.validate()?;
        Ok(NormalizedAdjustmentSet::from_sliders(self))
    }
}

/// Slider values rescaled into each operator's own domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedAdjustmentSet {
    /// Exposure in stops (-2 to +2).
    pub exposure_ev: f32,
    /// Additive offset per channel (-1 to +1).
    pub brightness: f32,
    /// Contrast factor around mid-gray (0 to 2).
    pub contrast: f32,
    /// Chroma factor around luma (0 to 2).
    pub saturation: f32,
    /// Brightness offset restricted to shadows (-1 to +1).
    pub shadow_amount: f32,
    /// Contrast factor restricted to highlights (0 to 2).
    pub highlight_amount: f32,
    /// Target neutral temperature in Kelvin (5500 to 7500).
    pub temperature_kelvin: f32,
    /// Green-magenta offset (-1000 to +1000).
    pub tint: f32,
    /// Black point shift (-1 to +1).
    pub black_point: f32,
    /// Midtone lift (-1 to +1).
    pub brilliance: f32,
    /// Saturation boost for muted colors (-1 to +1).
    pub vibrance: f32,
}

impl Default for NormalizedAdjustmentSet {
    fn default() -> Self {
        Self {
            exposure_ev: 0.0,
            brightness: 0.0,
            contrast: 1.0,
            saturation: 1.0,
            shadow_amount: 0.0,
            highlight_amount: 1.0,
            temperature_kelvin: REFERENCE_KELVIN,
            tint: 0.0,
            black_point: 0.0,
            brilliance: 0.0,
            vibrance: 0.0,
        }
    }
}

impl NormalizedAdjustmentSet {
    /// Rescale slider values without validating them.
    ///
    /// Callers at the request boundary should go through
    /// [`AdjustmentSet::normalize`] instead.
    pub fn from_sliders(adj: &AdjustmentSet) -> Self {
        Self {
            exposure_ev: adj.exposure / EXPOSURE_DIVISOR,
            brightness: adj.brightness / 100.0,
            contrast: adj.contrast / 100.0 + 1.0,
            saturation: adj.saturation / 100.0 + 1.0,
            shadow_amount: adj.shadows / 100.0,
            highlight_amount: adj.highlights / 100.0 + 1.0,
            temperature_kelvin: REFERENCE_KELVIN + adj.warmth * WHITE_BALANCE_GAIN,
            tint: adj.tint * WHITE_BALANCE_GAIN,
            black_point: adj.black_point / 100.0,
            brilliance: adj.brilliance / 100.0,
            vibrance: adj.vibrance / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral_and_valid() {
        let adj = AdjustmentSet::new();
        assert!(adj.is_neutral());
        assert!(adj.validate().is_ok());
    }

    #[test]
    fn test_not_neutral_after_set() {
        let adj = AdjustmentSet::new().with(Slider::Tint, -3.0);
        assert!(!adj.is_neutral());
        assert_eq!(adj.tint, -3.0);
    }

    #[test]
    fn test_get_set_every_slider() {
        let mut adj = AdjustmentSet::new();
        for (i, slider) in Slider::ALL.into_iter().enumerate() {
            adj.set(slider, i as f32);
        }
        for (i, slider) in Slider::ALL.into_iter().enumerate() {
            assert_eq!(adj.get(slider), i as f32, "{}", slider);
        }
        assert_eq!(adj.black_point, 6.0);
    }

    #[test]
    fn test_labels_match_ui() {
        let labels: Vec<&str> = Slider::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Exposure",
                "Brilliance",
                "Highlights",
                "Shadows",
                "Contrast",
                "Brightness",
                "Black Point",
                "Saturation",
                "Vibrance",
                "Warmth",
                "Tint",
            ]
        );
    }

    #[test]
    fn test_names_match_serde() {
        for slider in Slider::ALL {
            let json = serde_json::to_string(&slider).unwrap();
            assert_eq!(json, format!("\"{}\"", slider.name()));
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        for slider in Slider::ALL {
            assert!(AdjustmentSet::new().with(slider, 100.0).validate().is_ok());
            assert!(AdjustmentSet::new().with(slider, -100.0).validate().is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let adj = AdjustmentSet::new().with(Slider::Warmth, 100.5);
        assert_eq!(
            adj.validate(),
            Err(InvalidInput::SliderOutOfRange {
                slider: Slider::Warmth,
                value: 100.5
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let adj = AdjustmentSet::new().with(Slider::Shadows, f32::INFINITY);
        assert!(adj.validate().is_err());

        let adj = AdjustmentSet::new().with(Slider::Contrast, f32::NAN);
        match adj.validate() {
            Err(InvalidInput::SliderOutOfRange { slider, value }) => {
                assert_eq!(slider, Slider::Contrast);
                assert!(value.is_nan());
            }
            other => panic!("expected SliderOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_clamped() {
        let adj = AdjustmentSet {
            exposure: 250.0,
            tint: -1000.0,
            saturation: f32::NAN,
            vibrance: f32::NEG_INFINITY,
            brightness: 42.0,
            ..Default::default()
        };
        let clamped = adj.clamped();
        assert_eq!(clamped.exposure, 100.0);
        assert_eq!(clamped.tint, -100.0);
        assert_eq!(clamped.saturation, 0.0);
        assert_eq!(clamped.vibrance, -100.0);
        assert_eq!(clamped.brightness, 42.0);
        assert!(clamped.validate().is_ok());
    }

    #[test]
    fn test_neutral_normalizes_to_default() {
        let normalized = AdjustmentSet::new().normalize().unwrap();
        assert_eq!(normalized, NormalizedAdjustmentSet::default());
    }

    #[test]
    fn test_normalization_conventions() {
        let adj = AdjustmentSet {
            exposure: 100.0,
            brightness: 50.0,
            contrast: -100.0,
            saturation: 100.0,
            shadows: -20.0,
            highlights: 40.0,
            warmth: 100.0,
            tint: -100.0,
            black_point: 10.0,
            brilliance: -30.0,
            vibrance: 70.0,
        };
        let n = adj.normalize().unwrap();
        assert_eq!(n.exposure_ev, 2.0);
        assert_eq!(n.brightness, 0.5);
        assert_eq!(n.contrast, 0.0);
        assert_eq!(n.saturation, 2.0);
        assert_eq!(n.shadow_amount, -0.2);
        assert!((n.highlight_amount - 1.4).abs() < 1e-6);
        assert_eq!(n.temperature_kelvin, 7500.0);
        assert_eq!(n.tint, -1000.0);
        assert_eq!(n.black_point, 0.1);
        assert!((n.brilliance + 0.3).abs() < 1e-6);
        assert!((n.vibrance - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_rejects_invalid() {
        let adj = AdjustmentSet::new().with(Slider::Exposure, -101.0);
        assert!(adj.normalize().is_err());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let adj = AdjustmentSet::new().with(Slider::BlackPoint, 12.5);
        let json = serde_json::to_string(&adj).unwrap();
        assert!(json.contains("\"blackPoint\":12.5"), "{}", json);

        let parsed: AdjustmentSet = serde_json::from_str(r#"{"warmth": -40}"#).unwrap();
        assert_eq!(parsed.warmth, -40.0);
        assert_eq!(parsed.exposure, 0.0);
    }
}
