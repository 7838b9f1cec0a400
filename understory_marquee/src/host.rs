// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract between the motion engine and the host that owns the markup.
//!
//! The engine never touches a DOM or a window directly. Hosts implement
//! [`TrackSurface`] for the scrolling strip and [`MarqueeHost`] for listener
//! registration and frame scheduling, then forward raw input as
//! [`InputEvent`]s.

use kurbo::Point;

/// The scrolling strip that holds the carousel items.
pub trait TrackSurface {
    /// Number of items currently in the track, including any duplicates.
    fn item_count(&self) -> usize;

    /// Deep-duplicates every item currently in the track and appends the copies
    /// after the originals, preserving their rendered appearance.
    fn duplicate_items(&mut self);

    /// Removes every item at or after `len`.
    fn truncate_items(&mut self, len: usize);

    /// Width of the item at `index`, including its horizontal margins.
    fn item_outer_width(&self, index: usize) -> f64;

    /// Total scrollable extent of the track, duplicates included.
    fn scroll_width(&self) -> f64;

    /// Sets the visual horizontal offset of the track.
    fn set_offset(&mut self, x: f64);
}

/// Input sources the engine subscribes to while attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Window resize.
    Resize,
    /// Page scroll. Hosts should register it as passive.
    Scroll,
    /// Pointer down/move/up/leave on the track.
    Pointer,
    /// Touch start/move/end/cancel on the track. Moves must be cancelable so
    /// a horizontal drag can suppress native scrolling.
    Touch,
    /// Native drag start on media inside the track.
    NativeDrag,
}

impl Listener {
    /// Every listener, in registration order.
    pub const ALL: [Self; 5] = [
        Self::Resize,
        Self::Scroll,
        Self::Pointer,
        Self::Touch,
        Self::NativeDrag,
    ];
}

/// Handle for a pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Services the engine needs from its environment.
pub trait MarqueeHost {
    /// The track surface type.
    type Track: TrackSurface;

    /// Returns the track surface, if the markup has one.
    fn track(&self) -> Option<&Self::Track>;

    /// Returns the track surface mutably, if the markup has one.
    fn track_mut(&mut self) -> Option<&mut Self::Track>;

    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;

    /// Starts delivering events from `listener`.
    fn listen(&mut self, listener: Listener);

    /// Stops delivering events from `listener`.
    fn unlisten(&mut self, listener: Listener);

    /// Asks for [`Marquee::on_frame`](crate::Marquee::on_frame) to be called
    /// once before the next paint.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancels a request made with [`MarqueeHost::request_frame`].
    ///
    /// Cancelling a token whose frame already ran must be a no-op.
    fn cancel_frame(&mut self, token: FrameToken);
}

impl<T: MarqueeHost + ?Sized> MarqueeHost for &mut T {
    type Track = T::Track;

    fn track(&self) -> Option<&Self::Track> {
        (**self).track()
    }

    fn track_mut(&mut self) -> Option<&mut Self::Track> {
        (**self).track_mut()
    }

    fn scroll_y(&self) -> f64 {
        (**self).scroll_y()
    }

    fn listen(&mut self, listener: Listener) {
        (**self).listen(listener);
    }

    fn unlisten(&mut self, listener: Listener) {
        (**self).unlisten(listener);
    }

    fn request_frame(&mut self) -> FrameToken {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        (**self).cancel_frame(token);
    }
}

/// Raw input forwarded by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// The window was resized.
    Resize,
    /// The page scrolled to vertical offset `y`.
    Scroll {
        /// New vertical scroll offset.
        y: f64,
    },
    /// A mouse button was pressed over the track.
    PointerDown {
        /// Pointer X in client coordinates.
        x: f64,
    },
    /// The mouse moved.
    PointerMove {
        /// Pointer X in client coordinates.
        x: f64,
    },
    /// The mouse button was released.
    PointerUp,
    /// The pointer left the track.
    PointerLeave,
    /// A touch began at the given client position.
    TouchStart(Point),
    /// The touch moved to the given client position.
    TouchMove(Point),
    /// The touch ended.
    TouchEnd,
    /// The touch was cancelled by the platform.
    TouchCancel,
    /// The platform is about to start a native drag of media in the track.
    NativeDragStart,
}

/// What the host should do with the event it just forwarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the platform's default action (native scroll or native drag).
    pub prevent_default: bool,
}

impl EventResponse {
    /// Let the platform handle the event normally.
    pub const PASS: Self = Self {
        prevent_default: false,
    };

    /// Suppress the platform's default action.
    pub const PREVENT_DEFAULT: Self = Self {
        prevent_default: true,
    };
}
