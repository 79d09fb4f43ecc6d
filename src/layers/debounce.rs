//! Single-slot timer used to coalesce bursts of host notifications.
//!
//! Scheduling replaces whatever was pending, so at most one callback is
//! outstanding per debouncer and it runs once the burst has been quiet for
//! the full delay. Time is always passed in, which keeps the type free of
//! any runtime and makes it deterministic in tests.

use instant::Instant;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the window for future schedules. A pending deadline is kept.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Cancels any pending deadline and starts a new one at `now + delay`
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending callback becomes due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` exactly once per schedule, as soon as `now` reaches the
    /// deadline, and clears the slot.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
