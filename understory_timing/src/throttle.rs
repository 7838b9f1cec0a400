// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading-edge throttle.

use crate::Millis;

/// Lets an event through, then rejects events until a cooldown has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    cooldown: Millis,
    last_pass: Option<Millis>,
}

impl Throttle {
    /// Creates a throttle that admits at most one event per `cooldown` ms.
    #[must_use]
    pub const fn new(cooldown: Millis) -> Self {
        Self {
            cooldown,
            last_pass: None,
        }
    }

    /// Returns the cooldown in milliseconds.
    #[must_use]
    pub const fn cooldown(&self) -> Millis {
        self.cooldown
    }

    /// Returns `true` if an event at `now` may pass, and starts a new cooldown.
    ///
    /// A timestamp earlier than the last admitted one is rejected.
    pub fn try_acquire(&mut self, now: Millis) -> bool {
        let ready = match self.last_pass {
            None => true,
            Some(last) => now >= last && now - last >= self.cooldown,
        };
        if ready {
            self.last_pass = Some(now);
        }
        ready
    }

    /// Forgets the last admitted event so the next one passes immediately.
    pub fn reset(&mut self) {
        self.last_pass = None;
    }
}
