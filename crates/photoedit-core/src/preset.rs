//! Canned looks.
//!
//! A preset is a single color-controls stage with fixed parameters. Presets
//! never run exposure, highlight/shadow, white balance or finish, so they are
//! not the full pipeline with fixed sliders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::operators::ColorControls;
use crate::pipeline::Pipeline;

/// The two built-in looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preset {
    /// Saturation x1.5.
    Vivid,
    /// Saturation x1.5 and brightness +0.1.
    VividWarm,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Vivid, Preset::VividWarm];

    /// Identifier used by callers (`vivid`, `vividWarm`).
    pub fn name(self) -> &'static str {
        match self {
            Preset::Vivid => "vivid",
            Preset::VividWarm => "vividWarm",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Preset::Vivid => "Vivid",
            Preset::VividWarm => "Vivid Warm",
        }
    }

    /// Fixed color-controls parameters for this look.
    pub fn color_controls(self) -> ColorControls {
        match self {
            Preset::Vivid => ColorControls::new(0.0, 1.0, 1.5),
            Preset::VividWarm => ColorControls::new(0.1, 1.0, 1.5),
        }
    }

    /// Single-stage pipeline for this look.
    pub fn pipeline(self) -> Pipeline {
        Pipeline::new().then(self.color_controls())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vivid" | "Vivid" => Ok(Preset::Vivid),
            "vividWarm" | "vivid_warm" | "vivid-warm" | "Vivid Warm" => Ok(Preset::VividWarm),
            other => Err(InvalidInput::UnknownPreset(other.to_string())),
        }
    }
}
