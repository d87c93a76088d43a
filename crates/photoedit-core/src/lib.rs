//! photoedit Core - Image adjustment library
//!
//! This crate provides the pixel pipeline behind the photo editor: eleven
//! slider adjustments (exposure, brilliance, highlights, shadows, contrast,
//! brightness, black point, saturation, vibrance, warmth, tint) and two canned
//! looks (Vivid, Vivid Warm), applied to decoded 8-bit RGB or RGBA rasters.
//!
//! Decoding and encoding image files is left to the caller.
//!
//! # Example
//!
//! ```ignore
//! use photoedit_core::{apply_adjustments, AdjustmentSet, Raster, Slider};
//!
//! let image = Raster::filled(640, 480, [128, 128, 128, 255]);
//! let adj = AdjustmentSet::new().with(Slider::Brightness, 20.0);
//! let edited = apply_adjustments(&image, &adj)?;
//! assert_eq!(edited.width(), 640);
//! ```

pub mod adjustments;
pub mod color;
pub mod config;
pub mod error;
pub mod operators;
pub mod pipeline;
pub mod preset;
pub mod processor;
pub mod raster;
pub mod stats;

pub use adjustments::{AdjustmentSet, NormalizedAdjustmentSet, Slider};
pub use config::{ProcessorConfig, RangePolicy};
pub use error::{InvalidInput, ProcessError};
pub use operators::{ColorControls, ExposureAdjust, Finish, HighlightShadow, WhiteBalance};
pub use pipeline::{Operator, Pipeline, Stage};
pub use preset::Preset;
pub use processor::{apply_adjustments, apply_preset, apply_preset_named, PhotoProcessor};
pub use raster::{PixelFormat, Raster};
pub use stats::{compute_stats, ImageStats};
