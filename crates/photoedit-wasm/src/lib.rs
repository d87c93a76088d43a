//! photoedit WASM - WebAssembly bindings for photoedit-core
//!
//! Exposes slider adjustments and presets to the browser editor.
//!
//! # Module Structure
//!
//! - `adjustments` - Slider values and `apply_adjustments`
//! - `preset` - Built-in looks (`apply_preset`)
//! - `types` - WASM-compatible raster wrapper
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRaster, AdjustmentValues, apply_adjustments } from '@photoedit/wasm';
//!
//! await init();
//!
//! const data = ctx.getImageData(0, 0, w, h);
//! const source = new JsRaster(w, h, 4, new Uint8Array(data.data.buffer));
//! const values = new AdjustmentValues();
//! values.contrast = 25;
//! const edited = apply_adjustments(source, values);
//! ```

use photoedit_core::ProcessError;
use wasm_bindgen::prelude::*;

mod adjustments;
mod preset;
mod types;

pub use adjustments::{
    apply_adjustments, apply_adjustments_with_config, slider_names, AdjustmentValues,
};
pub use preset::{apply_preset, preset_names};
pub use types::JsRaster;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert a processing error into the string the UI shows, logging it to
/// the browser console.
pub(crate) fn js_error(err: ProcessError) -> JsValue {
    let message = err.to_string();
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}
