//! Keystroke debounce logic
//!
//! A single-slot timer: each keystroke schedules work to run after a quiet
//! period, replacing whatever was scheduled before. The frame loop polls
//! `take_due` with the current time, so tests can drive the clock directly.

use std::time::{Duration, Instant};

/// Quiet period between the last keystroke and the suggestion search
pub const QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Holds at most one pending payload and the instant it becomes due
#[derive(Debug, Clone)]
pub struct DebounceSlot<T> {
    pending: Option<(Instant, T)>,
}

impl<T> DebounceSlot<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `payload` to fire one quiet period after `now`.
    ///
    /// Any previously scheduled payload is discarded, so only the most
    /// recent keystroke's payload can ever fire.
    pub fn schedule(&mut self, now: Instant, payload: T) {
        self.pending = Some((now + QUIET_PERIOD, payload));
    }

    /// Drop the pending payload without firing it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the scheduled payload would fire, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the payload if its quiet period has elapsed at `now`.
    ///
    /// Consumes the slot on fire: a payload is handed out at most once.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        if matches!(&self.pending, Some((deadline, _)) if now >= *deadline) {
            self.pending.take().map(|(_, payload)| payload)
        } else {
            None
        }
    }
}

impl<T> Default for DebounceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
