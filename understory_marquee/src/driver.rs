// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::drag::DragController;
use crate::scroll::ScrollDirection;
use crate::track::{LoopTrack, WrapMode};
use crate::velocity::VelocityModel;

/// The per-frame motion step.
///
/// Each [`MotionDriver::tick`] either advances the track autonomously or, while
/// a drag owns the position, defers to the drag's render offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionDriver {
    wrap_mode: WrapMode,
    paused: bool,
    frames: u64,
}

impl MotionDriver {
    /// Creates a driver using the given wrap mode.
    #[must_use]
    pub fn new(wrap_mode: WrapMode) -> Self {
        Self {
            wrap_mode,
            paused: false,
            frames: 0,
        }
    }

    /// The wrap mode applied after each autonomous step.
    #[must_use]
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    /// Suspends or resumes autonomous motion.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Returns `true` while autonomous motion is suspended.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of ticks run so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one frame and returns the offset to render.
    pub fn tick(
        &mut self,
        track: &mut LoopTrack,
        velocity: &mut VelocityModel,
        direction: ScrollDirection,
        drag: &DragController,
    ) -> f64 {
        self.frames += 1;

        if drag.owns_position() {
            return drag.render_offset().unwrap_or(track.position());
        }
        if self.paused || !track.is_ready() {
            return track.position();
        }

        velocity.advance();
        track.translate(velocity.delta(direction));
        track.wrap(self.wrap_mode);
        track.position()
    }
}
