//! WASM-compatible wrapper types for image data.
//!
//! JavaScript hands over decoded pixels (typically from a canvas
//! `ImageData`) and gets a new raster back for every request.

use photoedit_core::Raster;
use wasm_bindgen::prelude::*;

/// A decoded 8-bit raster for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out as a
/// `Uint8Array`, so keep the raster around and extract pixels only when the
/// canvas needs them.
#[wasm_bindgen]
pub struct JsRaster {
    raster: Raster,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a raster from dimensions, channel count (3 or 4) and
    /// row-major pixel data.
    ///
    /// Nothing is checked here; an inconsistent raster is rejected when an
    /// adjustment is applied to it.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> JsRaster {
        JsRaster {
            raster: Raster::from_raw(width, height, channels, pixels),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Bytes per pixel: 3 for RGB, 4 for RGBA.
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.raster.channels()
    }

    /// Number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.raster.pixels().len()
    }

    /// Returns the pixel data as a Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.raster.pixels().to_vec()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional; wasm-bindgen's finalizer releases it otherwise.
    pub fn free(self) {}
}

impl JsRaster {
    /// Borrow the core raster without copying pixels.
    pub(crate) fn raster(&self) -> &Raster {
        &self.raster
    }

    pub(crate) fn from_raster(raster: Raster) -> Self {
        Self { raster }
    }
}
