//! Preset bindings.

use crate::js_error;
use crate::types::JsRaster;
use photoedit_core::Preset;
use wasm_bindgen::prelude::*;

/// Preset identifiers accepted by `apply_preset`.
#[wasm_bindgen]
pub fn preset_names() -> Vec<String> {
    Preset::ALL.iter().map(|p| p.name().to_string()).collect()
}

/// Apply a built-in look (`"vivid"` or `"vividWarm"`) to an image.
///
/// Unknown names are rejected without touching the image.
#[wasm_bindgen]
pub fn apply_preset(image: &JsRaster, name: &str) -> Result<JsRaster, JsValue> {
    photoedit_core::apply_preset_named(image.raster(), name)
        .map(JsRaster::from_raster)
        .map_err(js_error)
}
