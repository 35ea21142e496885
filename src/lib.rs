//! # floem-spectrum
//!
//! A horizontally scrollable HSB spectrum picker for
//! [Floem](https://github.com/lapce/floem).
//!
//! Each picker covers one channel (hue, saturation, or brightness). Dragging
//! scrolls a gradient under a fixed indicator; releasing with speed lets it
//! coast to a stop. [`spectrum_panel`] wires three pickers into one color.
//!
//! The gesture and deceleration logic lives in [`PickerModel`], which runs
//! without a UI: ticks come from an injected [`Scheduler`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_spectrum::{spectrum_picker, PickerType};
//!
//! let hue = RwSignal::new(0.5);
//! // Use `spectrum_picker(PickerType::Hue, hue)` in your Floem view tree.
//! ```

mod color;
mod config;
mod constants;
mod math;
mod model;
mod panel;
mod picker_type;
mod scheduler;
mod spectrum_picker;
mod stops;
mod velocity;

pub use color::Hsb;
pub use config::{ConfigError, DecelerationConfig, PickerConfig};
pub use model::{GestureState, PickerDelegate, PickerModel};
pub use panel::spectrum_panel;
pub use picker_type::PickerType;
pub use scheduler::{ManualScheduler, Scheduler, Ticket};
pub use spectrum_picker::{spectrum_picker, spectrum_picker_with_config, SpectrumPicker};
pub use stops::{color_stops, ColorStop};
pub use velocity::VelocityTracker;
