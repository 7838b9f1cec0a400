// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::scroll::ScrollDirection;

/// Boosted speeds within this distance of the base speed settle onto it.
const SETTLE_EPSILON: f64 = 1e-6;

/// Autonomous speed with scroll-triggered boosts and exponential decay.
///
/// Speeds are in pixels per frame. The current speed never drops below the
/// base speed, and a boost always resets to `base_speed * boost_multiplier`
/// instead of adding to the current value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityModel {
    base_speed: f64,
    current_speed: f64,
    boost_multiplier: f64,
    decay_rate: f64,
}

impl VelocityModel {
    /// Creates a model resting at `base_speed`.
    ///
    /// Parameters are normalized: a negative or non-finite `base_speed`
    /// becomes `0`, `boost_multiplier` is raised to at least `1`, and
    /// `decay_rate` is clamped into `(0, 1]`.
    #[must_use]
    pub fn new(base_speed: f64, boost_multiplier: f64, decay_rate: f64) -> Self {
        let base_speed = if base_speed.is_finite() {
            base_speed.max(0.0)
        } else {
            0.0
        };
        let boost_multiplier = if boost_multiplier.is_finite() {
            boost_multiplier.max(1.0)
        } else {
            1.0
        };
        let decay_rate = if decay_rate.is_nan() || decay_rate <= 0.0 {
            f64::MIN_POSITIVE
        } else {
            decay_rate.min(1.0)
        };
        Self {
            base_speed,
            current_speed: base_speed,
            boost_multiplier,
            decay_rate,
        }
    }

    /// The resting speed.
    #[must_use]
    pub fn base_speed(&self) -> f64 {
        self.base_speed
    }

    /// The current, possibly boosted, speed.
    #[must_use]
    pub fn current_speed(&self) -> f64 {
        self.current_speed
    }

    /// The factor applied to the base speed on boost.
    #[must_use]
    pub fn boost_multiplier(&self) -> f64 {
        self.boost_multiplier
    }

    /// Fraction of the boosted excess removed per frame.
    #[must_use]
    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    /// Returns `true` while the current speed is above the base speed.
    #[must_use]
    pub fn is_boosted(&self) -> bool {
        self.current_speed > self.base_speed
    }

    /// Resets the current speed to `base_speed * boost_multiplier`.
    pub fn boost(&mut self) {
        self.current_speed = self.base_speed * self.boost_multiplier;
    }

    /// Decays the current speed one frame toward the base speed.
    ///
    /// Each frame the speed becomes `max(base, current - (current - base) * decay)`.
    /// Once the remaining excess drops below `1e-6` px/frame the speed settles
    /// exactly on the base speed, so [`VelocityModel::is_boosted`] eventually
    /// turns `false` instead of approaching base forever.
    pub fn advance(&mut self) {
        if !self.is_boosted() {
            return;
        }
        let gap = self.current_speed - self.base_speed;
        let next = (self.current_speed - gap * self.decay_rate).max(self.base_speed);
        self.current_speed = if next - self.base_speed < SETTLE_EPSILON {
            self.base_speed
        } else {
            next
        };
    }

    /// Signed position delta for one frame.
    ///
    /// Scrolling down moves the track left (negative), scrolling up moves it
    /// right (positive).
    #[must_use]
    pub fn delta(&self, direction: ScrollDirection) -> f64 {
        match direction {
            ScrollDirection::Down => -self.current_speed,
            ScrollDirection::Up => self.current_speed,
        }
    }
}
