//! Error types for the fallible edges of the crate.
//!
//! Gameplay operations are total and never return errors. Only loading and
//! validating configuration can fail.

use thiserror::Error;

/// Configuration loading or validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("initial_time must be at least 1 second")]
    ZeroInitialTime,

    #[error("tick_interval_ms must be non-zero")]
    ZeroTickInterval,

    #[error("layout range {min}..{max} is empty or not finite")]
    InvalidLayoutRange { min: f64, max: f64 },

    #[error("critical_threshold {threshold} exceeds initial_time {initial_time}")]
    ThresholdTooLarge { threshold: u32, initial_time: u32 },
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
