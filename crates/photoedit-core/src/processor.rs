//! Entry points used by the UI.
//!
//! [`PhotoProcessor`] validates a request, builds the pipeline for it and runs
//! it. It holds only configuration, so one instance can be shared across
//! threads and reused for any number of requests.

use tracing::{debug, warn};

use crate::adjustments::{AdjustmentSet, Slider};
use crate::config::{ProcessorConfig, RangePolicy};
use crate::error::{InvalidInput, ProcessError};
use crate::pipeline::Pipeline;
use crate::preset::Preset;
use crate::raster::Raster;

/// Stateless façade over the adjustment pipeline.
#[derive(Debug, Clone, Default)]
pub struct PhotoProcessor {
    config: ProcessorConfig,
}

impl PhotoProcessor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Apply the slider adjustments to `image`.
    ///
    /// # Errors
    /// - `InvalidInput` if the image is empty, has an unsupported channel count
    ///   or a short buffer, or a slider is out of range (under
    ///   [`RangePolicy::Reject`]) or not finite.
    /// - `OperatorFailure` if a stage produces unusable values.
    pub fn apply_adjustments(
        &self,
        image: &Raster,
        adjustments: &AdjustmentSet,
    ) -> Result<Raster, ProcessError> {
        let result = self.check_image(image).and_then(|_| {
            let sliders = self.resolve_sliders(adjustments)?;
            let params = sliders.normalize()?;
            let pipeline = Pipeline::from_adjustments(&params)
                .with_parallel_threshold(self.config.parallel_threshold);

            debug!(
                width = image.width(),
                height = image.height(),
                stages = pipeline.operators().iter().filter(|op| !op.is_neutral()).count(),
                "applying adjustments"
            );
            pipeline.execute(image)
        });

        if let Err(err) = &result {
            warn!("adjustment request failed: {err}");
        }
        result
    }

    /// Apply one of the built-in looks to `image`.
    pub fn apply_preset(&self, image: &Raster, preset: Preset) -> Result<Raster, ProcessError> {
        let result = self.check_image(image).and_then(|_| {
            debug!(
                width = image.width(),
                height = image.height(),
                preset = preset.name(),
                "applying preset"
            );
            preset
                .pipeline()
                .with_parallel_threshold(self.config.parallel_threshold)
                .execute(image)
        });

        if let Err(err) = &result {
            warn!(preset = preset.name(), "preset request failed: {err}");
        }
        result
    }

    /// Look up a preset by name and apply it.
    pub fn apply_preset_named(&self, image: &Raster, name: &str) -> Result<Raster, ProcessError> {
        let preset = name.parse::<Preset>().map_err(|err| {
            warn!("preset request failed: {err}");
            ProcessError::from(err)
        })?;
        self.apply_preset(image, preset)
    }

    fn check_image(&self, image: &Raster) -> Result<(), ProcessError> {
        image.validate()?;
        Ok(())
    }

    fn resolve_sliders(&self, adjustments: &AdjustmentSet) -> Result<AdjustmentSet, InvalidInput> {
        match self.config.range_policy {
            RangePolicy::Reject => Ok(*adjustments),
            RangePolicy::Clamp => {
                // NaN and infinities are never clamped into range
                if let Some(slider) = Slider::ALL
                    .into_iter()
                    .find(|&s| !adjustments.get(s).is_finite())
                {
                    return Err(InvalidInput::SliderOutOfRange {
                        slider,
                        value: adjustments.get(slider),
                    });
                }
                Ok(adjustments.clamped())
            }
        }
    }
}

/// Apply slider adjustments with the default configuration.
pub fn apply_adjustments(
    image: &Raster,
    adjustments: &AdjustmentSet,
) -> Result<Raster, ProcessError> {
    PhotoProcessor::default().apply_adjustments(image, adjustments)
}

/// Apply a preset with the default configuration.
pub fn apply_preset(image: &Raster, preset: Preset) -> Result<Raster, ProcessError> {
    PhotoProcessor::default().apply_preset(image, preset)
}

/// Apply a preset by name (`vivid`, `vividWarm`) with the default configuration.
pub fn apply_preset_named(image: &Raster, name: &str) -> Result<Raster, ProcessError> {
    PhotoProcessor::default().apply_preset_named(image, name)
}
