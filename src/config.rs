//! Picker configuration, loadable from TOML.
//!
//! ```toml
//! picker_type = "saturation"
//! should_decelerate = true
//!
//! [deceleration]
//! decay = 0.8
//! ```
//!
//! Missing fields take their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;
use crate::picker_type::PickerType;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown picker type '{0}' (expected hue, saturation or brightness)")]
    UnknownPickerType(String),

    #[error("Invalid deceleration parameter {field}: {value}")]
    InvalidDeceleration { field: &'static str, value: f64 },
}

/// Physics of the inertial scroll after a drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecelerationConfig {
    /// Seconds between ticks.
    pub tick_interval_secs: f64,
    /// Per-tick velocity multiplier, strictly between 0 and 1.
    pub decay: f64,
    /// Deceleration ends once |speed| drops to this.
    pub stop_threshold: f64,
    /// Each tick moves the value by `speed * tick_interval_secs / velocity_divisor`.
    pub velocity_divisor: f64,
}

impl Default for DecelerationConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: constants::TICK_INTERVAL,
            decay: constants::DECAY,
            stop_threshold: constants::STOP_THRESHOLD,
            velocity_divisor: constants::VELOCITY_DIVISOR,
        }
    }
}

impl DecelerationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("tick_interval_secs", self.tick_interval_secs, self.tick_interval_secs > 0.0),
            ("decay", self.decay, self.decay > 0.0 && self.decay < 1.0),
            ("stop_threshold", self.stop_threshold, self.stop_threshold > 0.0),
            ("velocity_divisor", self.velocity_divisor, self.velocity_divisor > 0.0),
        ];
        for (field, value, ok) in checks {
            if !value.is_finite() || !ok {
                return Err(ConfigError::InvalidDeceleration { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub picker_type: PickerType,
    pub should_decelerate: bool,
    pub deceleration: DecelerationConfig,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            picker_type: PickerType::Hue,
            should_decelerate: true,
            deceleration: DecelerationConfig::default(),
        }
    }
}

impl PickerConfig {
    pub fn new(picker_type: PickerType) -> Self {
        Self {
            picker_type,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: PickerConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.deceleration.validate()
    }
}
