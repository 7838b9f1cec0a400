// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::velocity::VelocityModel;

/// Direction of the most recent page scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// The page scrolled toward the end; the track moves left.
    #[default]
    Down,
    /// The page scrolled toward the start; the track moves right.
    Up,
}

/// Infers scroll direction from successive vertical offsets and boosts speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollDirectionSensor {
    last_y: f64,
    direction: ScrollDirection,
}

impl ScrollDirectionSensor {
    /// Creates a sensor that compares future offsets against `initial_y`.
    #[must_use]
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y,
            direction: ScrollDirection::default(),
        }
    }

    /// The current direction.
    #[must_use]
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// The last recorded vertical offset.
    #[must_use]
    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    /// Handles one scroll event at vertical offset `y`.
    ///
    /// Always boosts `velocity`. The direction only changes when the offset
    /// moved the other way; an event with no movement keeps it. Returns `true`
    /// if the direction changed.
    pub fn on_scroll(&mut self, y: f64, velocity: &mut VelocityModel) -> bool {
        velocity.boost();

        let diff = y - self.last_y;
        self.last_y = y;

        let observed = if diff > 0.0 {
            ScrollDirection::Down
        } else if diff < 0.0 {
            ScrollDirection::Up
        } else {
            return false;
        };

        if observed == self.direction {
            return false;
        }
        self.direction = observed;
        true
    }
}
