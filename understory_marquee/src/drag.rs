// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use understory_event_state::drag::{AxisLock, DragState, DragUpdate, PointerKind};

use crate::track::normalize;

/// Outcome of a move event fed to the [`DragController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragMove {
    /// No gesture of this kind is in progress.
    Ignored,
    /// Touch gesture still below the axis-lock threshold.
    Pending,
    /// The gesture is dragging; render the track at `offset`.
    Drag {
        /// Render offset, normalized into the wrap range.
        offset: f64,
    },
    /// The gesture was handed to native vertical scrolling.
    Passthrough,
}

/// Manual repositioning of the track by mouse or touch.
///
/// During a drag the controller only produces a *render offset*; the committed
/// track position is left alone until [`DragController::end`], which returns
/// the single value to commit. Normalizing the render offset on every move is
/// therefore purely cosmetic.
#[derive(Clone, Copy, Debug)]
pub struct DragController {
    gesture: DragState,
    start_position: f64,
    render_offset: Option<f64>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(understory_event_state::drag::DEFAULT_AXIS_LOCK_THRESHOLD)
    }
}

impl DragController {
    /// Creates an idle controller with the given touch axis-lock threshold.
    #[must_use]
    pub fn new(axis_lock_threshold: f64) -> Self {
        Self {
            gesture: DragState::new(axis_lock_threshold),
            start_position: 0.0,
            render_offset: None,
        }
    }

    /// Starts a mouse drag at pointer `x` from the committed `position`.
    pub fn pointer_down(&mut self, x: f64, position: f64) {
        self.gesture.start(PointerKind::Mouse, Point::new(x, 0.0));
        self.start_position = position;
        self.render_offset = None;
    }

    /// Moves a mouse drag to pointer `x`.
    pub fn pointer_move(&mut self, x: f64, period: f64) -> DragMove {
        if self.gesture.pointer_kind() != Some(PointerKind::Mouse) {
            return DragMove::Ignored;
        }
        let update = self.gesture.update(Point::new(x, 0.0));
        self.apply(update, period)
    }

    /// Records the start of a touch; nothing else happens until it moves.
    pub fn touch_start(&mut self, point: Point, position: f64) {
        self.gesture.start(PointerKind::Touch, point);
        self.start_position = position;
        self.render_offset = None;
    }

    /// Moves a touch to `point`.
    ///
    /// The first move past the threshold decides the axis. When it locks
    /// horizontal, the drag starts from the committed `position` at that
    /// moment, since autonomous motion kept running while the axis was
    /// undecided.
    pub fn touch_move(&mut self, point: Point, position: f64, period: f64) -> DragMove {
        if self.gesture.pointer_kind() != Some(PointerKind::Touch) {
            return DragMove::Ignored;
        }
        let was_undetermined = self.gesture.axis_lock() == Some(AxisLock::Undetermined);
        let update = self.gesture.update(point);
        if was_undetermined {
            match update {
                DragUpdate::Drag { .. } => {
                    self.start_position = position;
                    log::debug!("touch gesture locked horizontal");
                }
                DragUpdate::Passthrough => log::debug!("touch gesture locked vertical"),
                _ => {}
            }
        }
        self.apply(update, period)
    }

    /// Ends a mouse gesture, returning the position to commit if it dragged.
    pub fn pointer_end(&mut self, period: f64) -> Option<f64> {
        if self.gesture.pointer_kind() != Some(PointerKind::Mouse) {
            return None;
        }
        self.end(period)
    }

    /// Ends a touch gesture, returning the position to commit if it dragged.
    pub fn touch_end(&mut self, period: f64) -> Option<f64> {
        if self.gesture.pointer_kind() != Some(PointerKind::Touch) {
            return None;
        }
        self.end(period)
    }

    /// Ends whatever gesture is in progress.
    ///
    /// Returns `normalize(start_position + total_dx)` if the gesture was
    /// dragging, or `None` for idle, undecided and vertical gestures.
    pub fn end(&mut self, period: f64) -> Option<f64> {
        self.render_offset = None;
        let total = self.gesture.end()?;
        Some(normalize(self.start_position + total.x, period))
    }

    /// Returns `true` while a gesture owns the track position.
    #[must_use]
    pub fn owns_position(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// The most recent render offset of the current drag.
    #[must_use]
    pub fn render_offset(&self) -> Option<f64> {
        self.render_offset
    }

    /// Axis decision of the current gesture, if any.
    #[must_use]
    pub fn axis_lock(&self) -> Option<AxisLock> {
        self.gesture.axis_lock()
    }

    fn apply(&mut self, update: DragUpdate, period: f64) -> DragMove {
        match update {
            DragUpdate::Idle => DragMove::Ignored,
            DragUpdate::Pending => DragMove::Pending,
            DragUpdate::Passthrough => DragMove::Passthrough,
            DragUpdate::Drag { total, .. } => {
                let offset = normalize(self.start_position + total.x, period);
                self.render_offset = Some(offset);
                DragMove::Drag { offset }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use understory_event_state::drag::AxisLock;

    use super::{DragController, DragMove};
    use crate::track::normalize;

    const PERIOD: f64 = 400.0;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn mouse_drag_renders_without_committing() {
        let mut drag = DragController::default();
        drag.pointer_down(100.0, -50.0);
        assert!(drag.owns_position());

        let DragMove::Drag { offset } = drag.pointer_move(130.0, PERIOD) else {
            panic!("mouse drag should engage");
        };
        // -50 + 30 = -20, already in range.
        assert!(approx(offset, -20.0));
        assert_eq!(drag.render_offset(), Some(offset));

        // Dragging past the boundary wraps the render offset only.
        let DragMove::Drag { offset } = drag.pointer_move(200.0, PERIOD) else {
            panic!("mouse drag should continue");
        };
        assert!(approx(offset, -350.0));
    }

    #[test]
    fn release_commits_normalized_total() {
        let mut drag = DragController::default();
        let start = -390.0;
        drag.pointer_down(0.0, start);
        drag.pointer_move(-25.0, PERIOD);
        drag.pointer_move(-700.0, PERIOD);

        let committed = drag.pointer_end(PERIOD).unwrap();
        assert!(approx(committed, normalize(start - 700.0, PERIOD)));
        assert!((-PERIOD..0.0).contains(&committed));
        assert!(!drag.owns_position());
        assert_eq!(drag.render_offset(), None);
    }

    #[test]
    fn click_without_move_commits_start_position() {
        let mut drag = DragController::default();
        drag.pointer_down(10.0, -120.0);
        assert_eq!(drag.pointer_end(PERIOD), Some(-120.0));
    }

    #[test]
    fn touch_jitter_leaves_axis_undetermined() {
        let mut drag = DragController::default();
        drag.touch_start(Point::new(100.0, 100.0), -10.0);
        assert!(!drag.owns_position());

        let result = drag.touch_move(Point::new(102.0, 102.0), -12.0, PERIOD);
        assert_eq!(result, DragMove::Pending);
        assert_eq!(drag.axis_lock(), Some(AxisLock::Undetermined));
        assert!(!drag.owns_position());
        assert_eq!(drag.touch_end(PERIOD), None);
    }

    #[test]
    fn horizontal_touch_lock_is_sticky() {
        let mut drag = DragController::default();
        drag.touch_start(Point::new(0.0, 0.0), -10.0);

        // Autonomous motion moved the track to -14 before the lock.
        let result = drag.touch_move(Point::new(10.0, 2.0), -14.0, PERIOD);
        assert_eq!(result, DragMove::Drag { offset: -4.0 });
        assert!(drag.owns_position());

        // Vertical-only movement keeps dragging along x.
        let result = drag.touch_move(Point::new(10.0, 80.0), -14.0, PERIOD);
        assert_eq!(result, DragMove::Drag { offset: -4.0 });
        assert_eq!(drag.axis_lock(), Some(AxisLock::Horizontal));

        assert_eq!(drag.touch_end(PERIOD), Some(-4.0));
    }

    #[test]
    fn vertical_touch_never_drags() {
        let mut drag = DragController::default();
        drag.touch_start(Point::new(0.0, 0.0), -10.0);

        assert_eq!(
            drag.touch_move(Point::new(1.0, 30.0), -10.0, PERIOD),
            DragMove::Passthrough
        );
        assert_eq!(
            drag.touch_move(Point::new(90.0, 30.0), -10.0, PERIOD),
            DragMove::Passthrough
        );
        assert!(!drag.owns_position());
        assert_eq!(drag.touch_end(PERIOD), None);
    }

    #[test]
    fn events_for_the_other_device_are_ignored() {
        let mut drag = DragController::default();
        drag.pointer_down(0.0, -10.0);
        assert_eq!(
            drag.touch_move(Point::new(50.0, 0.0), -10.0, PERIOD),
            DragMove::Ignored
        );
        assert_eq!(drag.touch_end(PERIOD), None);
        assert!(drag.owns_position());

        drag.touch_start(Point::ZERO, -10.0);
        assert_eq!(drag.pointer_move(40.0, PERIOD), DragMove::Ignored);
        assert_eq!(drag.pointer_end(PERIOD), None);
    }

    #[test]
    fn idle_moves_are_ignored() {
        let mut drag = DragController::default();
        assert_eq!(drag.pointer_move(5.0, PERIOD), DragMove::Ignored);
        assert_eq!(drag.end(PERIOD), None);
    }
}
