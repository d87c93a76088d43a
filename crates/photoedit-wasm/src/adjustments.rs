//! Slider adjustment bindings.
//!
//! `AdjustmentValues` mirrors the eleven UI sliders so TypeScript can edit
//! them in place, and `apply_adjustments` runs the pipeline on a raster.

use crate::js_error;
use crate::types::JsRaster;
use photoedit_core::{AdjustmentSet, PhotoProcessor, ProcessorConfig, Slider};
use wasm_bindgen::prelude::*;

/// Slider values wrapper for JavaScript (-100 to 100, 0 is neutral)
#[wasm_bindgen]
pub struct AdjustmentValues {
    inner: AdjustmentSet,
}

#[wasm_bindgen]
impl AdjustmentValues {
    /// Create a set with every slider at 0
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: AdjustmentSet::new(),
        }
    }

    /// Get exposure value
    #[wasm_bindgen(getter)]
    pub fn exposure(&self) -> f32 {
        self.inner.exposure
    }

    /// Set exposure value
    #[wasm_bindgen(setter)]
    pub fn set_exposure(&mut self, value: f32) {
        self.inner.exposure = value;
    }

    /// Get brilliance value
    #[wasm_bindgen(getter)]
    pub fn brilliance(&self) -> f32 {
        self.inner.brilliance
    }

    /// Set brilliance value
    #[wasm_bindgen(setter)]
    pub fn set_brilliance(&mut self, value: f32) {
        self.inner.brilliance = value;
    }

    /// Get highlights value
    #[wasm_bindgen(getter)]
    pub fn highlights(&self) -> f32 {
        self.inner.highlights
    }

    /// Set highlights value
    #[wasm_bindgen(setter)]
    pub fn set_highlights(&mut self, value: f32) {
        self.inner.highlights = value;
    }

    /// Get shadows value
    #[wasm_bindgen(getter)]
    pub fn shadows(&self) -> f32 {
        self.inner.shadows
    }

    /// Set shadows value
    #[wasm_bindgen(setter)]
    pub fn set_shadows(&mut self, value: f32) {
        self.inner.shadows = value;
    }

    /// Get contrast value
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    /// Set contrast value
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.contrast = value;
    }

    /// Get brightness value
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    /// Set brightness value
    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.brightness = value;
    }

    /// Get black point value (`blackPoint` in TypeScript)
    #[wasm_bindgen(getter = blackPoint)]
    pub fn black_point(&self) -> f32 {
        self.inner.black_point
    }

    /// Set black point value
    #[wasm_bindgen(setter = blackPoint)]
    pub fn set_black_point(&mut self, value: f32) {
        self.inner.black_point = value;
    }

    /// Get saturation value
    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f32 {
        self.inner.saturation
    }

    /// Set saturation value
    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: f32) {
        self.inner.saturation = value;
    }

    /// Get vibrance value
    #[wasm_bindgen(getter)]
    pub fn vibrance(&self) -> f32 {
        self.inner.vibrance
    }

    /// Set vibrance value
    #[wasm_bindgen(setter)]
    pub fn set_vibrance(&mut self, value: f32) {
        self.inner.vibrance = value;
    }

    /// Get warmth value
    #[wasm_bindgen(getter)]
    pub fn warmth(&self) -> f32 {
        self.inner.warmth
    }

    /// Set warmth value
    #[wasm_bindgen(setter)]
    pub fn set_warmth(&mut self, value: f32) {
        self.inner.warmth = value;
    }

    /// Get tint value
    #[wasm_bindgen(getter)]
    pub fn tint(&self) -> f32 {
        self.inner.tint
    }

    /// Set tint value
    #[wasm_bindgen(setter)]
    pub fn set_tint(&mut self, value: f32) {
        self.inner.tint = value;
    }

    /// Check if every slider is at 0
    pub fn is_neutral(&self) -> bool {
        self.inner.is_neutral()
    }

    /// Reset every slider to 0
    pub fn reset(&mut self) {
        self.inner = AdjustmentSet::new();
    }

    /// Serialize to a plain object for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a plain object. Missing sliders default to 0.
    pub fn from_json(value: JsValue) -> Result<AdjustmentValues, JsValue> {
        let inner: AdjustmentSet =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for AdjustmentValues {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjustmentValues {
    pub(crate) fn inner(&self) -> &AdjustmentSet {
        &self.inner
    }
}

/// Slider identifiers in display order, as used by `to_json`.
#[wasm_bindgen]
pub fn slider_names() -> Vec<String> {
    Slider::ALL.iter().map(|s| s.name().to_string()).collect()
}

/// Apply the slider adjustments to an image.
///
/// Returns a new raster; the source is never modified. On error the caller
/// should keep showing its last good image.
///
/// # Example (TypeScript)
/// ```typescript
/// const values = new AdjustmentValues();
/// values.exposure = 50;   // +1 stop
/// values.warmth = 20;
///
/// const edited = apply_adjustments(source, values);
/// ```
#[wasm_bindgen]
pub fn apply_adjustments(image: &JsRaster, values: &AdjustmentValues) -> Result<JsRaster, JsValue> {
    photoedit_core::apply_adjustments(image.raster(), values.inner())
        .map(JsRaster::from_raster)
        .map_err(js_error)
}

/// Apply the slider adjustments with a processor configuration object,
/// e.g. `{ rangePolicy: "clamp" }`. Missing fields take their defaults.
#[wasm_bindgen]
pub fn apply_adjustments_with_config(
    image: &JsRaster,
    values: &AdjustmentValues,
    config: JsValue,
) -> Result<JsRaster, JsValue> {
    let config: ProcessorConfig =
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    PhotoProcessor::new(config)
        .apply_adjustments(image.raster(), values.inner())
        .map(JsRaster::from_raster)
        .map_err(js_error)
}
