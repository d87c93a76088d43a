//! Pipeline executor.
//!
//! A [`Pipeline`] is an ordered list of bound [`Operator`]s. Execution is a
//! strict left-to-right fold: the whole working buffer goes through one stage
//! before the next stage starts.
//!
//! ## Stage Order
//! 1. Exposure
//! 2. Color controls (brightness, contrast, saturation)
//! 3. Highlights / shadows
//! 4. White balance (warmth, tint)
//! 5. Finish (black point, brilliance, vibrance)
//!
//! After every stage each value is checked: a non-finite channel fails the
//! request with [`ProcessError::OperatorFailure`] and the remaining stages are
//! skipped. Finite values are clamped back into 0.0 to 1.0.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::adjustments::NormalizedAdjustmentSet;
use crate::color::{clamp_working, WorkingPixel};
use crate::config::DEFAULT_PARALLEL_THRESHOLD;
use crate::error::ProcessError;
use crate::operators::{ColorControls, ExposureAdjust, Finish, HighlightShadow, WhiteBalance};
use crate::raster::Raster;

/// Pixels per rayon work item, for cache locality.
const CHUNK_PIXELS: usize = 4096;

/// Operator families, used to name the stage that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Exposure,
    ColorControls,
    HighlightShadow,
    WhiteBalance,
    Finish,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Exposure => "Exposure",
            Stage::ColorControls => "Color controls",
            Stage::HighlightShadow => "Highlight/shadow",
            Stage::WhiteBalance => "White balance",
            Stage::Finish => "Finish",
        };
        f.write_str(name)
    }
}

/// An operator bound to its resolved parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Exposure(ExposureAdjust),
    ColorControls(ColorControls),
    HighlightShadow(HighlightShadow),
    WhiteBalance(WhiteBalance),
    Finish(Finish),
}

impl Operator {
    pub fn stage(&self) -> Stage {
        match self {
            Operator::Exposure(_) => Stage::Exposure,
            Operator::ColorControls(_) => Stage::ColorControls,
            Operator::HighlightShadow(_) => Stage::HighlightShadow,
            Operator::WhiteBalance(_) => Stage::WhiteBalance,
            Operator::Finish(_) => Stage::Finish,
        }
    }

    pub fn is_neutral(&self) -> bool {
        match self {
            Operator::Exposure(op) => op.is_neutral(),
            Operator::ColorControls(op) => op.is_neutral(),
            Operator::HighlightShadow(op) => op.is_neutral(),
            Operator::WhiteBalance(op) => op.is_neutral(),
            Operator::Finish(op) => op.is_neutral(),
        }
    }

    #[inline]
    pub fn apply(&self, px: WorkingPixel) -> WorkingPixel {
        match self {
            Operator::Exposure(op) => op.apply(px),
            Operator::ColorControls(op) => op.apply(px),
            Operator::HighlightShadow(op) => op.apply(px),
            Operator::WhiteBalance(op) => op.apply(px),
            Operator::Finish(op) => op.apply(px),
        }
    }
}

impl From<ExposureAdjust> for Operator {
    fn from(op: ExposureAdjust) -> Self {
        Operator::Exposure(op)
    }
}

impl From<ColorControls> for Operator {
    fn from(op: ColorControls) -> Self {
        Operator::ColorControls(op)
    }
}

impl From<HighlightShadow> for Operator {
    fn from(op: HighlightShadow) -> Self {
        Operator::HighlightShadow(op)
    }
}

impl From<WhiteBalance> for Operator {
    fn from(op: WhiteBalance) -> Self {
        Operator::WhiteBalance(op)
    }
}

impl From<Finish> for Operator {
    fn from(op: Finish) -> Self {
        Operator::Finish(op)
    }
}

/// Ordered operators to run over one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    operators: Vec<Operator>,
    parallel_threshold: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Create an empty pipeline. Executing it copies the image.
    pub fn new() -> Self {
        Self {
            operators: Vec::new(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Build the full adjustment pipeline in the fixed stage order.
    pub fn from_adjustments(params: &NormalizedAdjustmentSet) -> Self {
        Self::new()
            .then(ExposureAdjust::new(params.exposure_ev))
            .then(ColorControls::new(
                params.brightness,
                params.contrast,
                params.saturation,
            ))
            .then(HighlightShadow::new(
                params.shadow_amount,
                params.highlight_amount,
            ))
            .then(WhiteBalance::new(params.temperature_kelvin, params.tint))
            .then(Finish::new(
                params.black_point,
                params.brilliance,
                params.vibrance,
            ))
    }

    /// Append an operator.
    pub fn then(mut self, op: impl Into<Operator>) -> Self {
        self.operators.push(op.into());
        self
    }

    /// Images with at least `pixels` pixels run each stage on the rayon pool.
    pub fn with_parallel_threshold(mut self, pixels: usize) -> Self {
        self.parallel_threshold = pixels;
        self
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Stages in execution order.
    pub fn stages(&self) -> Vec<Stage> {
        self.operators.iter().map(Operator::stage).collect()
    }

    /// Run every stage over `image` and return a new raster.
    ///
    /// The input is validated first. On failure nothing is returned but the
    /// error.
    pub fn execute(&self, image: &Raster) -> Result<Raster, ProcessError> {
        let format = image.validate()?;
        let mut working = image.to_working();

        for op in &self.operators {
            if op.is_neutral() {
                continue;
            }
            run_stage(&mut working, op, self.parallel_threshold)?;
        }

        Ok(Raster::from_working(
            image.width(),
            image.height(),
            format,
            &working,
        ))
    }
}

/// Apply one operator to every pixel, checking and clamping its output.
fn run_stage(
    working: &mut [WorkingPixel],
    op: &Operator,
    parallel_threshold: usize,
) -> Result<(), ProcessError> {
    let apply_chunk = |chunk: &mut [WorkingPixel]| -> Result<(), ProcessError> {
        for px in chunk.iter_mut() {
            let out = op.apply(*px);
            if !out.iter().all(|c| c.is_finite()) {
                return Err(ProcessError::OperatorFailure {
                    stage: op.stage(),
                    reason: "non-finite channel value".to_string(),
                });
            }
            *px = clamp_working(out);
        }
        Ok(())
    };

    if working.len() >= parallel_threshold {
        working
            .par_chunks_mut(CHUNK_PIXELS)
            .try_for_each(apply_chunk)
    } else {
        apply_chunk(working)
    }
}
