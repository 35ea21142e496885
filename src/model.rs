//! Toolkit-independent picker state.
//!
//! [`PickerModel`] owns the picker value, runs the pan gesture state machine
//! and the deceleration physics, and notifies a delegate on every committed
//! value change. The Floem view is a thin shell around it.

use std::fmt;
use std::rc::Weak;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::config::{DecelerationConfig, PickerConfig};
use crate::picker_type::PickerType;
use crate::scheduler::{Scheduler, Ticket};
use crate::stops::{self, ColorStop};

/// Receives every committed value change.
///
/// The model holds delegates through a [`Weak`] reference: it never keeps
/// one alive, and a dropped delegate is skipped.
pub trait PickerDelegate {
    fn value_changed(&self, value: f64, picker_type: PickerType);
}

impl<F: Fn(f64, PickerType)> PickerDelegate for F {
    fn value_changed(&self, value: f64, picker_type: PickerType) {
        self(value, picker_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    /// A drag is in progress. `last_x` is `None` until a location is known.
    Tracking { last_x: Option<f64> },
    Decelerating { speed: f64, ticket: Ticket },
}

pub struct PickerModel {
    picker_type: PickerType,
    should_decelerate: bool,
    deceleration: DecelerationConfig,
    value: f64,
    hue_value_for_preview: f64,
    needs_display: bool,
    state: GestureState,
    scheduler: Box<dyn Scheduler>,
    delegate: Option<Weak<dyn PickerDelegate>>,
}

impl fmt::Debug for PickerModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerModel")
            .field("picker_type", &self.picker_type)
            .field("should_decelerate", &self.should_decelerate)
            .field("value", &self.value)
            .field("hue_value_for_preview", &self.hue_value_for_preview)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl PickerModel {
    /// Invalid deceleration parameters are replaced by the defaults.
    pub fn new(config: PickerConfig, scheduler: Box<dyn Scheduler>) -> Self {
        let deceleration = match config.deceleration.validate() {
            Ok(()) => config.deceleration,
            Err(e) => {
                warn!(picker = %config.picker_type, error = %e, "Using default deceleration");
                DecelerationConfig::default()
            }
        };
        Self {
            picker_type: config.picker_type,
            should_decelerate: config.should_decelerate,
            deceleration,
            value: 0.0,
            hue_value_for_preview: 0.0,
            needs_display: true,
            state: GestureState::Idle,
            scheduler,
            delegate: None,
        }
    }

    pub fn deceleration(&self) -> DecelerationConfig {
        self.deceleration
    }

    pub fn picker_type(&self) -> PickerType {
        self.picker_type
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn hue_value_for_preview(&self) -> f64 {
        self.hue_value_for_preview
    }

    pub fn should_decelerate(&self) -> bool {
        self.should_decelerate
    }

    /// Disabling also stops a deceleration already in flight.
    pub fn set_should_decelerate(&mut self, enabled: bool) {
        self.should_decelerate = enabled;
        if !enabled {
            self.stop_deceleration();
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_decelerating(&self) -> bool {
        matches!(self.state, GestureState::Decelerating { .. })
    }

    pub fn set_delegate(&mut self, delegate: Weak<dyn PickerDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Whether a redraw was requested since the last [`take_needs_display`](Self::take_needs_display).
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    pub fn take_needs_display(&mut self) -> bool {
        std::mem::take(&mut self.needs_display)
    }

    /// Commit a new value and notify the delegate once.
    ///
    /// Hue wraps around; saturation and brightness clamp, and a clamped
    /// result does not request a redraw.
    pub fn set_value(&mut self, value: f64) {
        if !value.is_finite() {
            warn!(picker = %self.picker_type, value, "Ignoring non-finite picker value");
            return;
        }
        if self.picker_type.is_circular() {
            self.value = crate::math::wrap_unit(value);
            self.needs_display = true;
        } else if (0.0..=1.0).contains(&value) {
            self.value = value;
            self.needs_display = true;
        } else {
            self.value = value.clamp(0.0, 1.0);
        }
        self.notify();
    }

    pub fn add_to_value(&mut self, delta: f64) {
        if !delta.is_finite() {
            warn!(picker = %self.picker_type, delta, "Ignoring non-finite value delta");
            return;
        }
        self.set_value(self.value + delta);
    }

    /// Fix the hue shown by a saturation or brightness spectrum.
    pub fn set_hue_value_for_preview(&mut self, hue: f64) {
        if !hue.is_finite() {
            warn!(picker = %self.picker_type, hue, "Ignoring non-finite preview hue");
            return;
        }
        self.hue_value_for_preview = hue.clamp(0.0, 1.0);
        self.needs_display = true;
    }

    /// Stops of the gradient centered on the current value.
    pub fn color_stops(&self) -> [ColorStop; 5] {
        self.color_stops_for(self.value)
    }

    pub fn color_stops_for(&self, value: f64) -> [ColorStop; 5] {
        stops::color_stops(self.picker_type, value, self.hue_value_for_preview)
    }

    pub fn pan_began(&mut self, x: f64) {
        self.stop_deceleration();
        debug!(picker = %self.picker_type, x, "Pan began");
        self.state = GestureState::Tracking { last_x: Some(x) };
    }

    /// Move by `(x - last_x) / view_width`. Without a known last location the
    /// delta is dropped and tracking starts from `x`.
    pub fn pan_changed(&mut self, x: f64, view_width: f64) {
        let last_x = match self.state {
            GestureState::Tracking { last_x } => last_x,
            GestureState::Idle | GestureState::Decelerating { .. } => {
                debug!(picker = %self.picker_type, x, "Pan changed without began");
                self.stop_deceleration();
                None
            }
        };
        if let Some(last_x) = last_x {
            if view_width > 0.0 {
                self.add_to_value((x - last_x) / view_width);
            } else {
                warn!(picker = %self.picker_type, view_width, "Ignoring drag on empty view");
            }
        }
        self.state = GestureState::Tracking { last_x: Some(x) };
    }

    /// End a drag. `velocity_x` is in pixels per second.
    pub fn pan_ended(&mut self, velocity_x: f64) {
        if !matches!(self.state, GestureState::Tracking { .. }) {
            return;
        }
        debug!(picker = %self.picker_type, velocity_x, "Pan ended");
        if self.should_decelerate && velocity_x.is_finite() {
            self.set_deceleration_speed(velocity_x);
        } else {
            self.state = GestureState::Idle;
        }
    }

    pub fn pan_cancelled(&mut self, velocity_x: f64) {
        self.pan_ended(velocity_x);
    }

    /// Replace the running deceleration with one starting at `speed`.
    pub fn set_deceleration_speed(&mut self, speed: f64) {
        self.stop_deceleration();
        if !speed.is_finite() || speed.abs() <= self.deceleration.stop_threshold {
            self.state = GestureState::Idle;
            return;
        }
        let interval = Duration::from_secs_f64(self.deceleration.tick_interval_secs);
        let ticket = self.scheduler.schedule_repeating(interval);
        debug!(picker = %self.picker_type, speed, ticket = ticket.raw(), "Deceleration started");
        self.state = GestureState::Decelerating { speed, ticket };
    }

    /// Advance the deceleration by one period. Stale tickets are ignored.
    pub fn tick(&mut self, ticket: Ticket) {
        let GestureState::Decelerating {
            speed,
            ticket: active,
        } = self.state
        else {
            return;
        };
        if active != ticket {
            trace!(stale = ticket.raw(), active = active.raw(), "Stale deceleration tick");
            return;
        }
        let speed = speed * self.deceleration.decay;
        if speed.abs() <= self.deceleration.stop_threshold {
            self.scheduler.cancel(active);
            self.state = GestureState::Idle;
            debug!(picker = %self.picker_type, value = self.value, "Deceleration finished");
            return;
        }
        self.state = GestureState::Decelerating { speed, ticket };
        trace!(speed, "Deceleration tick");
        self.add_to_value(
            speed * self.deceleration.tick_interval_secs / self.deceleration.velocity_divisor,
        );
    }

    fn stop_deceleration(&mut self) {
        if let GestureState::Decelerating { ticket, .. } = self.state {
            self.scheduler.cancel(ticket);
            self.state = GestureState::Idle;
        }
    }

    fn notify(&self) {
        if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
            delegate.value_changed(self.value, self.picker_type);
        }
    }
}

impl Drop for PickerModel {
    fn drop(&mut self) {
        self.stop_deceleration();
    }
}
