//! The HSB channel a picker scrolls through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Hsb;
use crate::config::ConfigError;
use crate::constants;
use crate::math;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerType {
    #[default]
    Hue,
    Saturation,
    Brightness,
}

impl PickerType {
    /// Distance between neighbouring gradient samples.
    pub fn padding(self) -> f64 {
        match self {
            PickerType::Hue => constants::HUE_PADDING,
            PickerType::Saturation | PickerType::Brightness => constants::CHANNEL_PADDING,
        }
    }

    /// Whether value mutations wrap around instead of clamping.
    pub fn is_circular(self) -> bool {
        self == PickerType::Hue
    }

    /// Range-adjust a gradient sample before it becomes a color.
    pub fn adjust_sample(self, sample: f64) -> f64 {
        match self {
            PickerType::Hue => math::reflect_unit(sample),
            PickerType::Saturation | PickerType::Brightness => sample.clamp(0.0, 1.0),
        }
    }

    /// The color a (range-adjusted) sample stands for.
    ///
    /// `hue_preview` fixes the hue of saturation and brightness spectra.
    pub fn sample_color(self, sample: f64, hue_preview: f64) -> Hsb {
        match self {
            PickerType::Hue => Hsb::new(sample, 1.0, 1.0),
            PickerType::Saturation => Hsb::new(hue_preview, sample, 1.0),
            PickerType::Brightness => Hsb::new(hue_preview, 1.0, sample),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PickerType::Hue => "hue",
            PickerType::Saturation => "saturation",
            PickerType::Brightness => "brightness",
        }
    }
}

impl fmt::Display for PickerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PickerType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hue" => Ok(PickerType::Hue),
            "saturation" => Ok(PickerType::Saturation),
            "brightness" => Ok(PickerType::Brightness),
            _ => Err(ConfigError::UnknownPickerType(s.to_string())),
        }
    }
}
