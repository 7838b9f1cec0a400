// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_event_state::drag::DEFAULT_AXIS_LOCK_THRESHOLD;
use understory_timing::Millis;

use crate::track::WrapMode;

/// How raw scroll events are rate-limited before they reach the direction sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollRateLimit {
    /// Every scroll event boosts.
    #[default]
    Unlimited,
    /// At most one scroll event per cooldown is processed; the rest are dropped.
    Throttle {
        /// Cooldown in milliseconds.
        cooldown_ms: Millis,
    },
}

/// Tuning for a [`Marquee`](crate::Marquee).
///
/// Out-of-range values are normalized rather than rejected:
/// - `base_speed` below zero or non-finite becomes `0`,
/// - `boost_multiplier` below `1` becomes `1`,
/// - `decay_rate` is clamped into `(0, 1]`,
/// - a negative `axis_lock_threshold` becomes `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeConfig {
    /// Autonomous speed in pixels per frame.
    pub base_speed: f64,
    /// Factor applied to `base_speed` on every boost.
    pub boost_multiplier: f64,
    /// Fraction of the boosted excess removed each frame.
    pub decay_rate: f64,
    /// Quiet window before a burst of resizes triggers a remeasure.
    pub resize_debounce_ms: Millis,
    /// Rate limit applied to scroll events.
    pub scroll_rate_limit: ScrollRateLimit,
    /// Touch displacement in pixels before the gesture axis is decided.
    pub axis_lock_threshold: f64,
    /// How the per-frame wrap step brings the position back into range.
    pub wrap_mode: WrapMode,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            base_speed: 1.0,
            boost_multiplier: 3.0,
            decay_rate: 0.05,
            resize_debounce_ms: 250,
            scroll_rate_limit: ScrollRateLimit::Unlimited,
            axis_lock_threshold: DEFAULT_AXIS_LOCK_THRESHOLD,
            wrap_mode: WrapMode::Shift,
        }
    }
}

impl MarqueeConfig {
    /// Sets the autonomous speed in pixels per frame.
    #[must_use]
    pub fn with_base_speed(mut self, base_speed: f64) -> Self {
        self.base_speed = base_speed;
        self
    }

    /// Sets the boost multiplier.
    #[must_use]
    pub fn with_boost_multiplier(mut self, boost_multiplier: f64) -> Self {
        self.boost_multiplier = boost_multiplier;
        self
    }

    /// Sets the per-frame decay rate.
    #[must_use]
    pub fn with_decay_rate(mut self, decay_rate: f64) -> Self {
        self.decay_rate = decay_rate;
        self
    }

    /// Sets the resize debounce window.
    #[must_use]
    pub fn with_resize_debounce_ms(mut self, resize_debounce_ms: Millis) -> Self {
        self.resize_debounce_ms = resize_debounce_ms;
        self
    }

    /// Sets the scroll rate limit.
    #[must_use]
    pub fn with_scroll_rate_limit(mut self, scroll_rate_limit: ScrollRateLimit) -> Self {
        self.scroll_rate_limit = scroll_rate_limit;
        self
    }

    /// Sets the touch axis-lock threshold.
    #[must_use]
    pub fn with_axis_lock_threshold(mut self, axis_lock_threshold: f64) -> Self {
        self.axis_lock_threshold = axis_lock_threshold;
        self
    }

    /// Sets the wrap mode.
    #[must_use]
    pub fn with_wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }
}
