//! Auto-save debounce timer.
//!
//! # Responsibility
//! - Model the single cancelable scheduled task the editor session owns.
//!
//! # Invariants
//! - At most one deadline is pending; scheduling replaces any prior one
//!   (pure debounce, not throttle).
//! - A deadline fires at most once, and only when polled at or past its due
//!   time. There is no background thread; the session's event loop polls.

use std::time::{Duration, Instant};

/// Cancelable single-deadline debounce.
#[derive(Debug, Clone)]
pub struct AutoSaveTimer {
    delay: Duration,
    due_at: Option<Instant>,
}

impl AutoSaveTimer {
    /// Creates a timer with the given quiet-period delay and no pending
    /// deadline.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            due_at: None,
        }
    }

    /// Configured quiet-period delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces the delay used by future `schedule` calls. A pending
    /// deadline keeps its original due time.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// (Re)schedules the deadline at `now + delay`, canceling any pending
    /// one. Only the most recently scheduled deadline can ever fire.
    pub fn schedule(&mut self, now: Instant) {
        self.due_at = Some(now + self.delay);
    }

    /// Drops any pending deadline.
    pub fn cancel(&mut self) {
        self.due_at = None;
    }

    /// Returns whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    /// Consumes the deadline if it is due at `now`.
    ///
    /// Returns `true` exactly once per scheduled deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.due_at {
            Some(due) if now >= due => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }
}
