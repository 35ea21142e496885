//! Repeating-tick scheduling for the deceleration cycle.
//!
//! The model never owns a timer directly. It asks a [`Scheduler`] for a
//! repeating cycle and receives a [`Ticket`]; the host calls
//! `PickerModel::tick` with that ticket on every period until the model
//! cancels it.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Identifies one scheduled repeating cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

pub trait Scheduler {
    /// Start a cycle firing every `interval` until cancelled.
    fn schedule_repeating(&mut self, interval: Duration) -> Ticket;

    /// Stop a cycle. Cancelling an unknown or finished ticket is a no-op.
    fn cancel(&mut self, ticket: Ticket);
}

#[derive(Debug, Default)]
struct ManualLog {
    next: u64,
    scheduled: Vec<(Ticket, Duration)>,
    cancelled: Vec<Ticket>,
}

/// A scheduler that only records requests. The caller drives ticks by hand.
///
/// Clones share the same log, so a test can keep one handle while the model
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    log: Rc<RefCell<ManualLog>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cycle ever scheduled, oldest first.
    pub fn scheduled(&self) -> Vec<(Ticket, Duration)> {
        self.log.borrow().scheduled.clone()
    }

    pub fn cancelled(&self) -> Vec<Ticket> {
        self.log.borrow().cancelled.clone()
    }

    /// Scheduled tickets that were not cancelled yet.
    pub fn active(&self) -> Vec<Ticket> {
        let log = self.log.borrow();
        log.scheduled
            .iter()
            .map(|(t, _)| *t)
            .filter(|t| !log.cancelled.contains(t))
            .collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> Ticket {
        let mut log = self.log.borrow_mut();
        log.next += 1;
        let ticket = Ticket(log.next);
        log.scheduled.push((ticket, interval));
        ticket
    }

    fn cancel(&mut self, ticket: Ticket) {
        let mut log = self.log.borrow_mut();
        if !log.cancelled.contains(&ticket) {
            log.cancelled.push(ticket);
        }
    }
}
