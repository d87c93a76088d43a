//! Error types for adjustment requests.
//!
//! Every failure is local to a single request. Input problems are reported as
//! [`ProcessError::InvalidInput`] before any pixel work starts; a stage that
//! cannot produce a usable result is reported as
//! [`ProcessError::OperatorFailure`] and no output image is returned.

use thiserror::Error;

use crate::adjustments::Slider;
use crate::pipeline::Stage;

/// Reasons an image or parameter set is rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    ZeroDimensions { width: u32, height: u32 },

    /// `width * height * channels` doesn't fit in memory on this target
    #[error("Invalid dimensions: {width}x{height} is too large")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// Only 3 (RGB) and 4 (RGBA) channel rasters are supported
    #[error("Unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannels(u8),

    /// Pixel buffer length doesn't match width * height * channels
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// Slider value outside [-100, 100] or not a finite number
    #[error("{slider} value {value} is outside the range [-100, 100]")]
    SliderOutOfRange { slider: Slider, value: f32 },

    /// Preset name doesn't match any known preset
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// Error returned by the processing entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    /// The request was rejected before the pipeline ran.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// A pipeline stage produced a non-representable result.
    #[error("{stage} stage failed: {reason}")]
    OperatorFailure { stage: Stage, reason: String },
}

impl ProcessError {
    /// Returns true if the request was rejected at the boundary.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ProcessError::InvalidInput(_))
    }

    /// Returns true if a pipeline stage failed.
    pub fn is_operator_failure(&self) -> bool {
        matches!(self, ProcessError::OperatorFailure { .. })
    }
}
