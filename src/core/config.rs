//! Game configuration.
//!
//! `GameConfig` holds the tunable constants of a session. The defaults match
//! the classic game: a ten second countdown ticking once per second.
//!
//! Configs can be built in code with the `with_*` methods or loaded from TOML;
//! missing keys fall back to the defaults.
//!
//! ```
//! use slide_rush::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str("initial_time = 15\nseed = 7").unwrap();
//! assert_eq!(config.initial_time, 15);
//! assert_eq!(config.tick_interval_ms, 1000);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Countdown length in time units (seconds).
    pub initial_time: u32,

    /// Wall-clock length of one time unit.
    pub tick_interval_ms: u64,

    /// Lower bound of a tile's cosmetic position, in percent.
    pub layout_min: f64,

    /// Upper bound (exclusive) of a tile's cosmetic position, in percent.
    pub layout_max: f64,

    /// Remaining time at or below which the timer is shown as critical.
    pub critical_threshold: u32,

    /// Seed for cosmetic randomness.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_time: 10,
            tick_interval_ms: 1000,
            layout_min: 5.0,
            layout_max: 65.0,
            critical_threshold: 3,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a playable session.
    pub fn validate(&self) -> Result<()> {
        if self.initial_time == 0 {
            return Err(ConfigError::ZeroInitialTime);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if !(self.layout_min.is_finite() && self.layout_max.is_finite())
            || self.layout_min >= self.layout_max
        {
            return Err(ConfigError::InvalidLayoutRange {
                min: self.layout_min,
                max: self.layout_max,
            });
        }
        if self.critical_threshold > self.initial_time {
            return Err(ConfigError::ThresholdTooLarge {
                threshold: self.critical_threshold,
                initial_time: self.initial_time,
            });
        }
        Ok(())
    }

    /// One time unit as a `Duration`.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn with_initial_time(mut self, seconds: u32) -> Self {
        self.initial_time = seconds;
        self
    }

    pub fn with_tick_interval_ms(mut self, millis: u64) -> Self {
        self.tick_interval_ms = millis;
        self
    }

    pub fn with_layout_range(mut self, min: f64, max: f64) -> Self {
        self.layout_min = min;
        self.layout_max = max;
        self
    }

    pub fn with_critical_threshold(mut self, seconds: u32) -> Self {
        self.critical_threshold = seconds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.initial_time, 10);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.critical_threshold, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_initial_time(20)
            .with_tick_interval_ms(250)
            .with_seed(123);

        assert_eq!(config.initial_time, 20);
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_toml_partial() {
        let config = GameConfig::from_toml_str("tick_interval_ms = 500").unwrap();
        assert_eq!(config.tick_interval_ms, 500);
        assert_eq!(config.initial_time, 10);
    }

    #[test]
    fn test_toml_parse_error() {
        let err = GameConfig::from_toml_str("initial_time = \"ten\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_errors() {
        let zero = GameConfig::default().with_initial_time(0);
        assert!(matches!(zero.validate(), Err(ConfigError::ZeroInitialTime)));

        let no_tick = GameConfig::default().with_tick_interval_ms(0);
        assert!(matches!(no_tick.validate(), Err(ConfigError::ZeroTickInterval)));

        let inverted = GameConfig::default().with_layout_range(65.0, 5.0);
        assert!(matches!(
            inverted.validate(),
            Err(ConfigError::InvalidLayoutRange { .. })
        ));

        let threshold = GameConfig::default()
            .with_initial_time(2)
            .with_critical_threshold(3);
        assert!(matches!(
            threshold.validate(),
            Err(ConfigError::ThresholdTooLarge { threshold: 3, initial_time: 2 })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
