//! Horizontal drag velocity estimation.
//!
//! Pointer events carry no velocity, so the picker keeps the recent
//! positions of a drag and reports the average speed over a short window
//! when it ends.

use std::collections::VecDeque;

use crate::constants;

/// Recent `(seconds, x)` samples of one drag.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    window: f64,
    samples: VecDeque<(f64, f64)>,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(constants::VELOCITY_WINDOW)
    }
}

impl VelocityTracker {
    pub fn new(window: f64) -> Self {
        Self {
            window,
            samples: VecDeque::new(),
        }
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Add a sample. `time` is seconds on any monotonic clock.
    pub fn push(&mut self, time: f64, x: f64) {
        self.samples.push_back((time, x));
        while let Some(&(t, _)) = self.samples.front() {
            if time - t > self.window && self.samples.len() > 2 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Record that the pointer is still at its last position at `time`.
    pub fn hold(&mut self, time: f64) {
        if let Some(&(_, x)) = self.samples.back() {
            self.push(time, x);
        }
    }

    /// Pixels per second between the oldest and newest sample in the window.
    pub fn velocity(&self) -> f64 {
        let (Some(&(t0, x0)), Some(&(t1, x1))) = (self.samples.front(), self.samples.back())
        else {
            return 0.0;
        };
        let dt = t1 - t0;
        if dt <= 0.0 {
            return 0.0;
        }
        (x1 - x0) / dt
    }
}
