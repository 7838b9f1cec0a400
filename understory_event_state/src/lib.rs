// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: gesture state managers for pointer and touch input.
//!
//! This crate provides small, focused state machines for UI interactions that
//! need stateful tracking across multiple events:
//!
//! - [`drag`]: Track a drag gesture from press to release, with movement deltas,
//!   total offsets and, for touch input, a one-time horizontal/vertical axis
//!   lock that decides whether the gesture belongs to the widget or to native
//!   page scrolling.
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing or spatial query system
//!
//! The crate does not assume any particular UI framework or event system. The
//! managers accept raw pointer positions and produce updates that applications
//! interpret, such as whether to suppress the platform's default scrolling.
//!
//! ## Usage Patterns
//!
//! ### Touch drag with axis lock
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::drag::{AxisLock, DragState, DragUpdate, PointerKind};
//!
//! let mut drag = DragState::default();
//! drag.start(PointerKind::Touch, Point::new(100.0, 100.0));
//!
//! // Small jitter: the axis is not decided yet.
//! assert_eq!(drag.update(Point::new(102.0, 101.0)), DragUpdate::Pending);
//!
//! // Clear horizontal motion locks the gesture to the horizontal axis.
//! let update = drag.update(Point::new(112.0, 102.0));
//! assert!(matches!(update, DragUpdate::Drag { .. }));
//! assert_eq!(drag.axis_lock(), Some(AxisLock::Horizontal));
//!
//! // The total horizontal offset is reported when the gesture ends.
//! let total = drag.end().unwrap();
//! assert_eq!(total.x, 12.0);
//! # }
//! # #[cfg(feature = "drag")]
//! # example();
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible.

#![no_std]

#[cfg(feature = "drag")]
pub mod drag;
