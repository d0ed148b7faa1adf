// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Debounced, change-detecting save scheduling.
//!
//! [`SaveDebouncer`] decides which values of a stream deserve a write:
//!
//! - The first value is the baseline (what was loaded). It is never saved.
//! - Every later value is held for a quiet period. A newer value replaces the
//!   held one and restarts the period.
//! - When the period elapses, the held value is saved only if it differs from
//!   the last value that got through (the baseline or the previous save).
//!
//! The state machine does no I/O and reads no clock; callers pass `now` and
//! sleep until [`SaveDebouncer::deadline`].

use std::time::{Duration, Instant};

/// Quiet period used for device configuration writes.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(5000);

/// What happened to a value handed to [`SaveDebouncer::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// First value of the stream, recorded as the baseline.
    Baseline,
    /// Held until the given deadline.
    Scheduled(Instant),
}

#[derive(Debug, Clone)]
pub struct SaveDebouncer<T> {
    quiet: Duration,
    /// Last value that passed the filters, starting with the baseline.
    last: Option<T>,
    /// Held value and the instant it becomes due.
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq> SaveDebouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        SaveDebouncer {
            quiet,
            last: None,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Feeds the next stream value.
    pub fn push(&mut self, value: T, now: Instant) -> Admission {
        if self.last.is_none() {
            self.last = Some(value);
            return Admission::Baseline;
        }
        let deadline = now + self.quiet;
        self.pending = Some((value, deadline));
        Admission::Scheduled(deadline)
    }

    /// Instant at which the held value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the value to save if the held one is due and actually changed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if deadline <= now => self.release(),
            _ => None,
        }
    }

    /// Releases the held value regardless of its deadline.
    ///
    /// Used when the stream ends, so a trailing edit is not lost.
    pub fn flush(&mut self) -> Option<T> {
        self.release()
    }

    fn release(&mut self) -> Option<T> {
        let (value, _) = self.pending.take()?;
        if self.last.as_ref() == Some(&value) {
            return None;
        }
        self.last = Some(value.clone());
        Some(value)
    }
}

impl<T: Clone + PartialEq> Default for SaveDebouncer<T> {
    fn default() -> Self {
        SaveDebouncer::new(DEFAULT_QUIET_PERIOD)
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
