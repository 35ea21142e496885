//! `Hsb`: the color representation produced by the pickers.
//!
//! Stores hue, saturation, and brightness as f64 in the 0.0–1.0 range and
//! converts to RGB, hex, and Floem colors on demand.

use floem::peniko::Color;
use serde::{Deserialize, Serialize};

use crate::math;

/// HSB color with components in the 0.0–1.0 range. Always opaque.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Default for Hsb {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 1.0,
            brightness: 1.0,
        }
    }
}

impl Hsb {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Normalized RGB (0.0–1.0).
    pub fn to_rgb_f64(&self) -> (f64, f64, f64) {
        math::hsb_to_rgb(self.hue, self.saturation, self.brightness)
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_rgb_f64();
        (
            (r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (b.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    /// Format as uppercase `RRGGBB` (no `#` prefix).
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Opaque Floem color.
    pub fn to_color(&self) -> Color {
        let (r, g, b) = self.to_rgb_f64();
        Color::rgba(r, g, b, 1.0)
    }
}
