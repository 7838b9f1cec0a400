// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture state: movement deltas, total offsets and touch axis locking.
//!
//! ## Usage
//!
//! 1) Start a gesture with [`DragState::start`], naming the [`PointerKind`].
//! 2) On each move event, call [`DragState::update`]. The returned
//!    [`DragUpdate`] says whether the gesture is still undecided, is dragging,
//!    or has been handed to native scrolling.
//! 3) End the gesture with [`DragState::end`], which reports the total offset
//!    if the gesture was dragging.
//!
//! Mouse gestures engage immediately. Touch gestures stay
//! [`AxisLock::Undetermined`] until the finger moves more than the threshold
//! on either axis, then lock once for the rest of the gesture: mostly
//! horizontal movement locks to [`AxisLock::Horizontal`] (a drag), anything
//! else locks to [`AxisLock::Vertical`] (passthrough).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::drag::{DragState, DragUpdate, PointerKind};
//!
//! let mut drag = DragState::default();
//!
//! drag.start(PointerKind::Mouse, Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! let update = drag.update(Point::new(15.0, 25.0));
//! let DragUpdate::Drag { delta, total } = update else {
//!     panic!("mouse drags engage immediately");
//! };
//! assert_eq!(delta.x, 5.0);
//! assert_eq!(total.x, 5.0);
//! ```

use kurbo::{Point, Vec2};

/// Default displacement, in pixels, a touch must exceed before its axis is decided.
pub const DEFAULT_AXIS_LOCK_THRESHOLD: f64 = 5.0;

/// The input device that started a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse or pen; the gesture is unambiguous and drags immediately.
    Mouse,
    /// Touch; the gesture must first be classified by axis.
    Touch,
}

/// One-time axis decision for a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisLock {
    /// Not enough movement yet to classify the gesture.
    Undetermined,
    /// The gesture drags horizontally.
    Horizontal,
    /// The gesture belongs to native vertical scrolling and is ignored.
    Vertical,
}

/// Result of feeding a move event into [`DragState::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// No gesture in progress.
    Idle,
    /// Touch gesture still below the axis-lock threshold.
    Pending,
    /// The gesture is dragging.
    Drag {
        /// Movement since the previous update.
        delta: Vec2,
        /// Movement since the gesture started.
        total: Vec2,
    },
    /// The gesture was locked to vertical and should be left to the platform.
    Passthrough,
}

#[derive(Clone, Copy, Debug)]
struct Session {
    kind: PointerKind,
    start: Point,
    last: Point,
    lock: AxisLock,
}

/// Tracks a single drag gesture.
#[derive(Clone, Copy, Debug)]
pub struct DragState {
    session: Option<Session>,
    threshold: f64,
}

impl Default for DragState {
    fn default() -> Self {
        Self::new(DEFAULT_AXIS_LOCK_THRESHOLD)
    }
}

impl DragState {
    /// Creates an idle tracker with the given touch axis-lock threshold.
    ///
    /// Negative or non-finite thresholds are treated as zero.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.max(0.0)
        } else {
            0.0
        };
        Self {
            session: None,
            threshold,
        }
    }

    /// Returns the touch axis-lock threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Starts a new gesture at `pos`, replacing any gesture in progress.
    pub fn start(&mut self, kind: PointerKind, pos: Point) {
        let lock = match kind {
            PointerKind::Mouse => AxisLock::Horizontal,
            PointerKind::Touch => AxisLock::Undetermined,
        };
        self.session = Some(Session {
            kind,
            start: pos,
            last: pos,
            lock,
        });
    }

    /// Feeds a move event into the gesture.
    pub fn update(&mut self, pos: Point) -> DragUpdate {
        let threshold = self.threshold;
        let Some(session) = self.session.as_mut() else {
            return DragUpdate::Idle;
        };

        match session.lock {
            AxisLock::Horizontal => {}
            AxisLock::Vertical => return DragUpdate::Passthrough,
            AxisLock::Undetermined => {
                let offset = pos - session.start;
                let (dx, dy) = (offset.x.abs(), offset.y.abs());
                if dx <= threshold && dy <= threshold {
                    return DragUpdate::Pending;
                }
                if dx <= dy {
                    session.lock = AxisLock::Vertical;
                    return DragUpdate::Passthrough;
                }
                session.lock = AxisLock::Horizontal;
            }
        }

        let delta = pos - session.last;
        session.last = pos;
        DragUpdate::Drag {
            delta,
            total: pos - session.start,
        }
    }

    /// Ends the gesture, returning its total offset if it was dragging.
    pub fn end(&mut self) -> Option<Vec2> {
        let session = self.session.take()?;
        (session.lock == AxisLock::Horizontal).then(|| session.last - session.start)
    }

    /// Returns `true` while any gesture is in progress, dragging or not.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` while a gesture is dragging.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.axis_lock() == Some(AxisLock::Horizontal)
    }

    /// Returns the axis decision of the current gesture, if any.
    #[must_use]
    pub fn axis_lock(&self) -> Option<AxisLock> {
        self.session.map(|s| s.lock)
    }

    /// Returns the input device of the current gesture, if any.
    #[must_use]
    pub fn pointer_kind(&self) -> Option<PointerKind> {
        self.session.map(|s| s.kind)
    }

    /// Returns the start position of the current gesture, if any.
    #[must_use]
    pub fn start_pos(&self) -> Option<Point> {
        self.session.map(|s| s.start)
    }

    /// Returns the offset from the gesture start to the last dragged position.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        self.session
            .filter(|s| s.lock == AxisLock::Horizontal)
            .map(|s| s.last - s.start)
    }
}
