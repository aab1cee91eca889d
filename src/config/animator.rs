use serde::{Deserialize, Serialize};

use super::style::RenderStyle;
use crate::error::ConfigError;
use crate::math::Rounding;
use crate::refinement::{RefinementParams, DEFAULT_LEVEL_COUNT, MAX_LEVEL_COUNT};

/// YAML input format for the animator. Every field is optional.
///
/// ```yaml
/// level_count: 7
/// tick_interval_ms: 500
/// rounding: truncate   # or "exact"
/// style:
///   marker_radius: 5
///   curve_color: "blue"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Number of refinement levels cycled through (K)
    pub level_count: usize,
    /// Milliseconds between two animation steps
    pub tick_interval_ms: f32,
    pub rounding: Rounding,
    pub style: RenderStyle,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            level_count: DEFAULT_LEVEL_COUNT,
            tick_interval_ms: 500.0,
            rounding: Rounding::default(),
            style: RenderStyle::default(),
        }
    }
}

impl AnimatorConfig {
    /// Parse and validate from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AnimatorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_LEVEL_COUNT).contains(&self.level_count) {
            return Err(ConfigError::InvalidLevelCount {
                count: self.level_count,
                max: MAX_LEVEL_COUNT,
            });
        }
        if !(self.tick_interval_ms.is_finite() && self.tick_interval_ms > 0.0) {
            return Err(ConfigError::InvalidTickInterval(self.tick_interval_ms));
        }
        self.style.validate()
    }

    /// Tick interval in seconds, the unit frame times are reported in
    pub fn tick_interval(&self) -> f32 {
        self.tick_interval_ms / 1000.0
    }

    pub fn refinement_params(&self) -> RefinementParams {
        RefinementParams {
            level_count: self.level_count,
            rounding: self.rounding,
        }
    }
}
