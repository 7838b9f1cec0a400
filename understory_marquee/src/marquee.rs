// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};
use understory_event_state::drag::AxisLock;
use understory_timing::{Millis, Throttle};

use crate::config::{MarqueeConfig, ScrollRateLimit};
use crate::dimension::DimensionTracker;
use crate::drag::{DragController, DragMove};
use crate::driver::MotionDriver;
use crate::duplicate::LoopDuplicator;
use crate::error::AttachError;
use crate::host::{EventResponse, FrameToken, InputEvent, Listener, MarqueeHost, TrackSurface};
use crate::scroll::{ScrollDirection, ScrollDirectionSensor};
use crate::track::LoopTrack;
use crate::velocity::VelocityModel;

/// An attached carousel: owns all motion state for one track.
///
/// Created by [`Marquee::attach`] and torn down by [`Marquee::detach`] (or on
/// drop). While attached it holds one pending frame request at a time;
/// each [`Marquee::on_frame`] runs a single tick and then requests the next
/// frame, so ticks never overlap.
#[derive(Debug)]
pub struct Marquee<H: MarqueeHost> {
    host: H,
    config: MarqueeConfig,
    track: LoopTrack,
    velocity: VelocityModel,
    sensor: ScrollDirectionSensor,
    scroll_throttle: Option<Throttle>,
    dimensions: DimensionTracker,
    duplicator: LoopDuplicator,
    drag: DragController,
    driver: MotionDriver,
    frame: Option<FrameToken>,
    offset: f64,
    attached: bool,
}

impl<H: MarqueeHost> Marquee<H> {
    /// Attaches to `host`.
    ///
    /// Duplicates the track items once, measures the loop period, registers
    /// every [`Listener`] and requests the first frame. Fails without side
    /// effects if the host has no track or the track has no items.
    pub fn attach(mut host: H, config: MarqueeConfig) -> Result<Self, AttachError> {
        let scroll_y = host.scroll_y();
        let surface = host.track_mut().ok_or(AttachError::MissingTrack)?;
        if surface.item_count() == 0 {
            return Err(AttachError::EmptyItems);
        }

        let mut duplicator = LoopDuplicator::new();
        let original_count = duplicator.ensure(surface);
        let mut dimensions = DimensionTracker::new(original_count, config.resize_debounce_ms);
        let period = dimensions.measure(surface);
        let track = LoopTrack::new(period);
        surface.set_offset(track.position());
        if track.is_ready() {
            log::debug!("marquee attached: {original_count} items, loop period {period}px");
        } else {
            log::warn!("marquee attached with zero loop period; motion is idle until a resize");
        }

        for listener in Listener::ALL {
            host.listen(listener);
        }
        let frame = Some(host.request_frame());

        let scroll_throttle = match config.scroll_rate_limit {
            ScrollRateLimit::Unlimited => None,
            ScrollRateLimit::Throttle { cooldown_ms } => Some(Throttle::new(cooldown_ms)),
        };

        Ok(Self {
            host,
            config,
            track,
            velocity: VelocityModel::new(
                config.base_speed,
                config.boost_multiplier,
                config.decay_rate,
            ),
            sensor: ScrollDirectionSensor::new(scroll_y),
            scroll_throttle,
            dimensions,
            duplicator,
            drag: DragController::new(config.axis_lock_threshold),
            driver: MotionDriver::new(config.wrap_mode),
            frame,
            offset: track.position(),
            attached: true,
        })
    }

    /// Releases every listener, cancels the pending frame and removes the
    /// duplicated items. Safe to call more than once.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;

        if let Some(token) = self.frame.take() {
            self.host.cancel_frame(token);
        }
        for listener in Listener::ALL {
            self.host.unlisten(listener);
        }
        self.dimensions.cancel();
        self.drag.end(self.track.loop_period());
        if let Some(surface) = self.host.track_mut() {
            self.duplicator.restore(surface);
        }
        log::debug!("marquee detached after {} frames", self.driver.frames());
    }

    /// Returns `true` until [`Marquee::detach`] runs.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Handles one input event at host time `now`.
    pub fn handle_event(&mut self, event: InputEvent, now: Millis) -> EventResponse {
        if !self.attached {
            return EventResponse::PASS;
        }
        let period = self.track.loop_period();
        let position = self.track.position();

        match event {
            InputEvent::Resize => {
                self.dimensions.on_resize(now);
                EventResponse::PASS
            }
            InputEvent::Scroll { y } => {
                let admitted = self
                    .scroll_throttle
                    .as_mut()
                    .is_none_or(|throttle| throttle.try_acquire(now));
                if admitted && self.sensor.on_scroll(y, &mut self.velocity) {
                    log::trace!("scroll direction now {:?}", self.sensor.direction());
                }
                EventResponse::PASS
            }
            InputEvent::PointerDown { x } => {
                self.drag.pointer_down(x, position);
                EventResponse::PASS
            }
            InputEvent::PointerMove { x } => {
                if let DragMove::Drag { offset } = self.drag.pointer_move(x, period) {
                    self.render(offset);
                }
                EventResponse::PASS
            }
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                if let Some(committed) = self.drag.pointer_end(period) {
                    self.commit(committed);
                }
                EventResponse::PASS
            }
            InputEvent::TouchStart(point) => {
                self.drag.touch_start(point, position);
                EventResponse::PASS
            }
            InputEvent::TouchMove(point) => match self.drag.touch_move(point, position, period) {
                DragMove::Drag { offset } => {
                    self.render(offset);
                    EventResponse::PREVENT_DEFAULT
                }
                DragMove::Ignored | DragMove::Pending | DragMove::Passthrough => {
                    EventResponse::PASS
                }
            },
            InputEvent::TouchEnd | InputEvent::TouchCancel => {
                if let Some(committed) = self.drag.touch_end(period) {
                    self.commit(committed);
                }
                EventResponse::PASS
            }
            InputEvent::NativeDragStart => EventResponse::PREVENT_DEFAULT,
        }
    }

    /// Runs one frame at host time `now`, then requests the next one.
    pub fn on_frame(&mut self, now: Millis) {
        if !self.attached {
            return;
        }
        // Stale if the host ran this frame unrequested.
        if let Some(token) = self.frame.take() {
            self.host.cancel_frame(token);
        }

        if let Some(surface) = self.host.track()
            && let Some(period) = self.dimensions.poll(now, surface)
        {
            if period != self.track.loop_period() {
                log::debug!(
                    "marquee loop period {} -> {period}px",
                    self.track.loop_period()
                );
            }
            if period <= 0.0 {
                log::warn!("marquee items measured zero width; motion is idle");
            }
            self.track.set_loop_period(period);
        }

        let offset = self.driver.tick(
            &mut self.track,
            &mut self.velocity,
            self.sensor.direction(),
            &self.drag,
        );
        self.render(offset);
        log::trace!(
            "frame {}: offset {offset}, speed {}",
            self.driver.frames(),
            self.velocity.current_speed()
        );

        self.frame = Some(self.host.request_frame());
    }

    /// Suspends autonomous motion. Frames, resizes and drags keep working.
    pub fn pause(&mut self) {
        self.driver.set_paused(true);
    }

    /// Resumes autonomous motion.
    pub fn resume(&mut self) {
        self.driver.set_paused(false);
    }

    /// Returns `true` while autonomous motion is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.driver.is_paused()
    }

    /// The committed track position.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.track.position()
    }

    /// The offset most recently applied to the track surface.
    #[must_use]
    pub fn render_offset(&self) -> f64 {
        self.offset
    }

    /// The offset most recently applied, as a transform for the track.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(Vec2::new(self.offset, 0.0))
    }

    /// Extent of one original pass through the items.
    #[must_use]
    pub fn loop_period(&self) -> f64 {
        self.track.loop_period()
    }

    /// The current, possibly boosted, speed in pixels per frame.
    #[must_use]
    pub fn current_speed(&self) -> f64 {
        self.velocity.current_speed()
    }

    /// The current scroll direction.
    #[must_use]
    pub fn direction(&self) -> ScrollDirection {
        self.sensor.direction()
    }

    /// Returns `true` while a drag owns the track position.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.owns_position()
    }

    /// The configuration this marquee was attached with.
    #[must_use]
    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MarqueeDebugInfo {
        MarqueeDebugInfo {
            attached: self.attached,
            position: self.track.position(),
            render_offset: self.offset,
            loop_period: self.track.loop_period(),
            content_extent: self.host.track().map(|surface| surface.scroll_width()),
            original_items: self.dimensions.original_count(),
            base_speed: self.velocity.base_speed(),
            current_speed: self.velocity.current_speed(),
            direction: self.sensor.direction(),
            axis_lock: self.drag.axis_lock(),
            dragging: self.drag.owns_position(),
            paused: self.driver.is_paused(),
            frames: self.driver.frames(),
            measurements: self.dimensions.measurements(),
            resize_pending: self.dimensions.resize_pending(),
            frame_pending: self.frame.is_some(),
        }
    }

    fn commit(&mut self, position: f64) {
        self.track.commit(position);
        log::debug!("drag committed at {}", self.track.position());
        self.render(self.track.position());
    }

    fn render(&mut self, offset: f64) {
        self.offset = offset;
        if let Some(surface) = self.host.track_mut() {
            surface.set_offset(offset);
        }
    }
}

impl<H: MarqueeHost> Drop for Marquee<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Debug snapshot of a [`Marquee`] state.
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeDebugInfo {
    /// Whether the marquee is still attached.
    pub attached: bool,
    /// Committed track position.
    pub position: f64,
    /// Offset most recently applied to the surface.
    pub render_offset: f64,
    /// Extent of one original pass.
    pub loop_period: f64,
    /// Scrollable extent of the track including duplicates, if the track exists.
    pub content_extent: Option<f64>,
    /// Number of original items.
    pub original_items: usize,
    /// Resting speed.
    pub base_speed: f64,
    /// Current speed.
    pub current_speed: f64,
    /// Current scroll direction.
    pub direction: ScrollDirection,
    /// Axis decision of the current gesture, if any.
    pub axis_lock: Option<AxisLock>,
    /// Whether a drag owns the position.
    pub dragging: bool,
    /// Whether autonomous motion is paused.
    pub paused: bool,
    /// Frames run so far.
    pub frames: u64,
    /// Loop period measurements run so far.
    pub measurements: u64,
    /// Whether a resize burst is waiting to settle.
    pub resize_pending: bool,
    /// Whether a frame request is outstanding.
    pub frame_pending: bool,
}
