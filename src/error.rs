//! Error types shared across the crate

use thiserror::Error;

/// Smallest polygon the corner-cutting transform accepts.
pub const MIN_POINTS: usize = 3;

/// Errors raised while subdividing a polyline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubdivisionError {
    /// Corner cutting was asked to refine fewer than [`MIN_POINTS`] points.
    #[error("corner cutting needs at least 3 points, got {count}")]
    InsufficientPoints { count: usize },
}

/// Errors raised while loading an [`AnimatorConfig`](crate::config::AnimatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("level_count must be between 1 and {max}, got {count}")]
    InvalidLevelCount { count: usize, max: usize },

    #[error("tick_interval_ms must be a positive number, got {0}")]
    InvalidTickInterval(f32),

    #[error("invalid style: {0}")]
    InvalidStyle(String),
}
