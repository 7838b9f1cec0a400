// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce.

use crate::Millis;

/// Coalesces bursts of triggers into one firing after a quiet period.
///
/// Every [`Debounce::trigger`] pushes the deadline out to `now + window`.
/// [`Debounce::poll`] returns `true` exactly once, on the first poll at or after
/// the deadline, and then disarms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    window: Millis,
    deadline: Option<Millis>,
}

impl Debounce {
    /// Creates a disarmed debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window: Millis) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Returns the quiet window in milliseconds.
    #[must_use]
    pub const fn window(&self) -> Millis {
        self.window
    }

    /// Records an event at `now`, restarting the quiet window.
    pub fn trigger(&mut self, now: Millis) {
        self.deadline = Some(now.saturating_add(self.window));
    }

    /// Returns `true` if the debounced work should run at `now`.
    ///
    /// Fires at most once per burst; the debouncer is disarmed afterwards.
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Returns the timestamp at which the pending burst will fire, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    /// Returns `true` while a burst is waiting for its quiet window.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops any pending firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
