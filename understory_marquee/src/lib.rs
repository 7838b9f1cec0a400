// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_marquee --heading-base-level=0

//! Understory Marquee: a headless motion engine for infinitely looping carousels.
//!
//! A marquee is a horizontal strip of items that drifts continuously, speeds up
//! whenever the page scrolls, and can be dragged by mouse or touch. The strip
//! loops seamlessly: the items are duplicated once, and the track offset is kept
//! in `[-period, 0)`, where the period is the width of one original pass.
//!
//! The engine is split into small pieces that can be used on their own:
//!
//! - [`LoopDuplicator`]: appends one copy of the items, once per attach cycle.
//! - [`DimensionTracker`]: measures the loop period and remeasures it after
//!   resize bursts settle (debounced with [`understory_timing::Debounce`]).
//! - [`VelocityModel`]: base speed, boosts and exponential decay.
//! - [`ScrollDirectionSensor`]: turns page scroll offsets into a direction and
//!   a boost.
//! - [`DragController`]: mouse and touch drags, with the touch axis lock from
//!   [`understory_event_state::drag`].
//! - [`MotionDriver`]: the per-frame step that moves and wraps the track.
//! - [`Marquee`]: ties everything to a [`MarqueeHost`] with an explicit
//!   attach/detach lifecycle.
//!
//! This crate deliberately does **not** know about the DOM, windows or any UI
//! framework. Hosts are responsible for:
//!
//! - Implementing [`TrackSurface`] over the real strip (item duplication,
//!   margin-aware widths, the visual offset).
//! - Registering the requested [`Listener`]s and forwarding raw input as
//!   [`InputEvent`]s, honoring the returned [`EventResponse`].
//! - Calling [`Marquee::on_frame`] once per requested frame.
//!
//! Time is passed in as monotonic milliseconds; the engine never reads a clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_marquee::{
//!     FrameToken, InputEvent, Listener, Marquee, MarqueeConfig, MarqueeHost, TrackSurface,
//! };
//!
//! struct Strip {
//!     widths: Vec<f64>,
//!     offset: f64,
//! }
//!
//! impl TrackSurface for Strip {
//!     fn item_count(&self) -> usize { self.widths.len() }
//!     fn duplicate_items(&mut self) { self.widths.extend_from_within(..); }
//!     fn truncate_items(&mut self, len: usize) { self.widths.truncate(len); }
//!     fn item_outer_width(&self, index: usize) -> f64 { self.widths[index] }
//!     fn scroll_width(&self) -> f64 { self.widths.iter().sum() }
//!     fn set_offset(&mut self, x: f64) { self.offset = x; }
//! }
//!
//! struct Page {
//!     strip: Strip,
//!     next_frame: u64,
//! }
//!
//! impl MarqueeHost for Page {
//!     type Track = Strip;
//!     fn track(&self) -> Option<&Strip> { Some(&self.strip) }
//!     fn track_mut(&mut self) -> Option<&mut Strip> { Some(&mut self.strip) }
//!     fn scroll_y(&self) -> f64 { 0.0 }
//!     fn listen(&mut self, _: Listener) {}
//!     fn unlisten(&mut self, _: Listener) {}
//!     fn request_frame(&mut self) -> FrameToken {
//!         self.next_frame += 1;
//!         FrameToken(self.next_frame)
//!     }
//!     fn cancel_frame(&mut self, _: FrameToken) {}
//! }
//!
//! let page = Page {
//!     strip: Strip { widths: vec![200.0, 200.0], offset: 0.0 },
//!     next_frame: 0,
//! };
//! let mut marquee = Marquee::attach(page, MarqueeConfig::default()).unwrap();
//! assert_eq!(marquee.loop_period(), 400.0);
//! assert_eq!(marquee.host().strip.widths.len(), 4);
//!
//! // Scrolling boosts the speed; frames move the strip left.
//! marquee.handle_event(InputEvent::Scroll { y: 30.0 }, 0);
//! for t in 0..10 {
//!     marquee.on_frame(t * 16);
//! }
//! assert!(marquee.position() < 0.0);
//! assert_eq!(marquee.host().strip.offset, marquee.position());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod dimension;
mod drag;
mod driver;
mod duplicate;
mod error;
mod host;
mod marquee;
mod scroll;
mod track;
mod velocity;

#[cfg(test)]
mod test_support;

pub use config::{MarqueeConfig, ScrollRateLimit};
pub use dimension::DimensionTracker;
pub use drag::{DragController, DragMove};
pub use driver::MotionDriver;
pub use duplicate::LoopDuplicator;
pub use error::AttachError;
pub use host::{EventResponse, FrameToken, InputEvent, Listener, MarqueeHost, TrackSurface};
pub use marquee::{Marquee, MarqueeDebugInfo};
pub use scroll::{ScrollDirection, ScrollDirectionSensor};
pub use track::{LoopTrack, WrapMode, normalize};
pub use velocity::VelocityModel;
