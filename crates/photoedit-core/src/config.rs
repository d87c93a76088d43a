//! Processor configuration.
//!
//! Every field has a default, so a partial JSON object (or none at all) is a
//! valid configuration.

use serde::{Deserialize, Serialize};

/// Pixel count at which stages switch to rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100_000;

/// What to do with slider values outside -100 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Fail the request with `SliderOutOfRange`.
    #[default]
    Reject,
    /// Clamp to the nearest bound and carry on. Non-finite values are still
    /// rejected.
    Clamp,
}

/// Settings for [`PhotoProcessor`](crate::PhotoProcessor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessorConfig {
    pub range_policy: RangePolicy,
    /// Images with at least this many pixels are processed in parallel.
    pub parallel_threshold: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            range_policy: RangePolicy::Reject,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ProcessorConfig {
    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    pub fn with_parallel_threshold(mut self, pixels: usize) -> Self {
        self.parallel_threshold = pixels;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProcessorConfig::default();
        assert_eq!(config.range_policy, RangePolicy::Reject);
        assert_eq!(config.parallel_threshold, 100_000);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ProcessorConfig = serde_json::from_str(r#"{"rangePolicy": "clamp"}"#).unwrap();
        assert_eq!(config.range_policy, RangePolicy::Clamp);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);

        let config: ProcessorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ProcessorConfig::default());
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result: Result<ProcessorConfig, _> =
            serde_json::from_str(r#"{"rangePolicy": "wrap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builders() {
        let config = ProcessorConfig::default()
            .with_range_policy(RangePolicy::Clamp)
            .with_parallel_threshold(16);
        assert_eq!(config.range_policy, RangePolicy::Clamp);
        assert_eq!(config.parallel_threshold, 16);
    }
}
