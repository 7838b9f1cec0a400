// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the per-frame wrap step brings the position back into `[-period, 0)`.
///
/// Both modes correct by at most one period per frame and so assume the
/// per-frame delta is smaller than the loop period. A larger delta can leave
/// the position out of range for a frame; drag commits always use the full
/// modulo in [`normalize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Shift by one period, keeping the overshoot: `p < -period` adds a period
    /// and `p >= 0` subtracts one.
    #[default]
    Shift,
    /// Boundary snap: `p <= -period` resets to `0` and `p >= 0` resets to
    /// `-period`. The overshoot is dropped and a frame may end at exactly `0`.
    Snap,
}

/// Normalizes `position` into `[-period, 0)`.
///
/// Uses the full modulo, so any finite position maps into range. A
/// non-positive or non-finite period leaves `position` unchanged.
#[must_use]
pub fn normalize(position: f64, period: f64) -> f64 {
    if !(period > 0.0 && period.is_finite()) {
        return position;
    }
    // `r` is in `[0, period)`.
    let r = ((position % period) + period) % period;
    r - period
}

/// The committed horizontal offset of a looping track and its loop period.
///
/// The position is only mutated by the per-frame motion step and by drag
/// commits. Until a positive period has been measured the track is not ready
/// and its position stays at `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopTrack {
    position: f64,
    loop_period: f64,
}

impl LoopTrack {
    /// Creates a track with the given loop period.
    ///
    /// A ready track starts at `-period`, which renders the same as `0` but is
    /// inside the wrap range. An unready track starts at `0`.
    #[must_use]
    pub fn new(loop_period: f64) -> Self {
        let loop_period = sanitize_period(loop_period);
        let position = if loop_period > 0.0 { -loop_period } else { 0.0 };
        Self {
            position,
            loop_period,
        }
    }

    /// The committed offset.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Extent of one original pass through the items.
    #[must_use]
    pub fn loop_period(&self) -> f64 {
        self.loop_period
    }

    /// Returns `true` once a positive loop period is known.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.loop_period > 0.0
    }

    /// Replaces the loop period after a remeasure.
    ///
    /// The committed position is renormalized against the new period.
    pub fn set_loop_period(&mut self, loop_period: f64) {
        self.loop_period = sanitize_period(loop_period);
        if self.is_ready() {
            self.position = normalize(self.position, self.loop_period);
        } else {
            self.position = 0.0;
        }
    }

    /// Commits a position, normalizing it into `[-period, 0)`.
    pub fn commit(&mut self, position: f64) {
        if self.is_ready() && position.is_finite() {
            self.position = normalize(position, self.loop_period);
        }
    }

    /// Moves the committed position by `delta` without wrapping.
    pub fn translate(&mut self, delta: f64) {
        if self.is_ready() && delta.is_finite() {
            self.position += delta;
        }
    }

    /// Applies the per-frame wrap step.
    pub fn wrap(&mut self, mode: WrapMode) {
        if !self.is_ready() {
            return;
        }
        let period = self.loop_period;
        match mode {
            WrapMode::Shift => {
                if self.position < -period {
                    self.position += period;
                } else if self.position >= 0.0 {
                    self.position -= period;
                }
            }
            WrapMode::Snap => {
                if self.position <= -period {
                    self.position = 0.0;
                } else if self.position >= 0.0 {
                    self.position = -period;
                }
            }
        }
    }

    /// Returns `true` if the committed position is inside `[-period, 0)`.
    #[must_use]
    pub fn in_range(&self) -> bool {
        self.is_ready() && self.position >= -self.loop_period && self.position < 0.0
    }
}

fn sanitize_period(period: f64) -> f64 {
    if period.is_finite() && period > 0.0 {
        period
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{LoopTrack, WrapMode, normalize};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn normalize_maps_into_half_open_range() {
        assert!(approx(normalize(-50.0, 400.0), -50.0));
        assert!(approx(normalize(0.0, 400.0), -400.0));
        assert!(approx(normalize(-400.0, 400.0), -400.0));
        assert!(approx(normalize(30.0, 400.0), -370.0));
        assert!(approx(normalize(-450.0, 400.0), -50.0));
        assert!(approx(normalize(1_250.0, 400.0), -350.0));
        assert!(approx(normalize(-2_000.0, 400.0), -400.0));
    }

    #[test]
    fn normalize_is_congruent_to_input() {
        for p in [-1234.5, -400.0, -0.5, 0.0, 0.5, 399.0, 4321.0] {
            let n = normalize(p, 400.0);
            assert!((-400.0..0.0).contains(&n), "{p} -> {n}");
            let k = (p - n) / 400.0;
            assert!(approx(k % 1.0, 0.0), "{p} and {n} differ by a whole period");
        }
    }

    #[test]
    fn normalize_without_period_is_identity() {
        assert_eq!(normalize(12.0, 0.0), 12.0);
        assert_eq!(normalize(12.0, -5.0), 12.0);
        assert_eq!(normalize(12.0, f64::INFINITY), 12.0);
    }

    #[test]
    fn ready_track_starts_inside_range() {
        let track = LoopTrack::new(250.0);
        assert_eq!(track.position(), -250.0);
        assert!(track.in_range());
    }

    #[test]
    fn unready_track_ignores_motion() {
        let mut track = LoopTrack::new(0.0);
        assert!(!track.is_ready());
        track.translate(-5.0);
        track.commit(-30.0);
        track.wrap(WrapMode::Shift);
        assert_eq!(track.position(), 0.0);
        assert!(!track.in_range());
    }

    #[test]
    fn shift_wrap_keeps_overshoot() {
        let mut track = LoopTrack::new(100.0);
        track.commit(-99.0);
        track.translate(-3.0);
        track.wrap(WrapMode::Shift);
        assert!(approx(track.position(), -2.0));

        track.commit(-1.0);
        track.translate(2.5);
        track.wrap(WrapMode::Shift);
        assert!(approx(track.position(), -98.5));
    }

    #[test]
    fn shift_wrap_keeps_exact_lower_bound() {
        let mut track = LoopTrack::new(100.0);
        track.commit(-99.0);
        track.translate(-1.0);
        track.wrap(WrapMode::Shift);
        assert_eq!(track.position(), -100.0);
        assert!(track.in_range());
    }

    #[test]
    fn snap_wrap_resets_to_boundaries() {
        let mut track = LoopTrack::new(100.0);
        track.commit(-99.0);
        track.translate(-3.0);
        track.wrap(WrapMode::Snap);
        assert_eq!(track.position(), 0.0);

        track.wrap(WrapMode::Snap);
        assert_eq!(track.position(), -100.0);
    }

    #[test]
    fn wrap_corrects_only_one_period_per_frame() {
        let mut track = LoopTrack::new(10.0);
        track.commit(-5.0);
        track.translate(-30.0);
        track.wrap(WrapMode::Shift);
        assert!(approx(track.position(), -25.0));
        assert!(!track.in_range());
    }

    #[test]
    fn new_period_renormalizes_position() {
        let mut track = LoopTrack::new(400.0);
        track.commit(-350.0);
        track.set_loop_period(300.0);
        assert!(approx(track.position(), -50.0));

        track.set_loop_period(0.0);
        assert!(!track.is_ready());
        assert_eq!(track.position(), 0.0);
    }
}
