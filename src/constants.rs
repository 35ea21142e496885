//! Physics, sizing, and styling constants for the picker.

/// Sample spacing around the center value for the hue spectrum
pub const HUE_PADDING: f64 = 0.04;

/// Sample spacing around the center value for saturation and brightness
pub const CHANNEL_PADDING: f64 = 0.5;

/// Relative gradient positions of the five color stops
pub const STOP_POSITIONS: [f32; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Seconds between deceleration ticks
pub const TICK_INTERVAL: f64 = 0.025;

/// Velocity multiplier applied on every deceleration tick
pub const DECAY: f64 = 0.7255;

/// Deceleration stops once |speed| falls to this value
pub const STOP_THRESHOLD: f64 = 0.001;

/// Divides `speed * interval` into a value delta
pub const VELOCITY_DIVISOR: f64 = 100.0;

/// Corner radius of the picker surface
pub const CORNER_RADIUS: f64 = 5.0;

/// Indicator inset from top and bottom, as a fraction of height
pub const INDICATOR_INSET: f64 = 0.4;

/// Indicator stroke width
pub const INDICATOR_WIDTH: f64 = 1.0;

/// Indicator alpha (black)
pub const INDICATOR_ALPHA: u8 = 128;

/// Window over which pointer velocity is estimated, in seconds
pub const VELOCITY_WINDOW: f64 = 0.1;

/// Default picker height
pub const PICKER_HEIGHT: f32 = 32.0;

/// Gap between panel elements
pub const GAP: f32 = 8.0;

/// Padding around the panel
pub const PADDING: f32 = 8.0;

/// Swatch side length in the panel
pub const SWATCH_SIZE: f32 = 32.0;

/// Hex label font size
pub const HEX_FONT: f32 = 11.0;
