// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic rate limiters for UI runtimes.
//!
//! This crate provides two tiny state machines for bounding how often expensive
//! work runs in response to bursts of input events:
//!
//! - [`Debounce`]: coalesces a burst of triggers into a single firing once the
//!   input has been quiet for a configured window (trailing edge).
//! - [`Throttle`]: lets the first event through and rejects further events
//!   until a cooldown has elapsed (leading edge).
//!
//! Neither type reads a clock. Callers pass monotonic timestamps in
//! milliseconds (for example from `performance.now()` or a frame clock), which
//! keeps the crate `no_std` and makes behavior fully deterministic in tests.
//! Hosts either poll on every frame or arm a one-shot timer for
//! [`Debounce::deadline`].
//!
//! ## Debounce example
//!
//! ```rust
//! use understory_timing::Debounce;
//!
//! let mut resize = Debounce::new(250);
//!
//! // A burst of resize events.
//! for t in [0, 10, 20, 30, 40] {
//!     resize.trigger(t);
//! }
//!
//! // Still inside the quiet window.
//! assert!(!resize.poll(100));
//! // 250ms after the last event the work runs exactly once.
//! assert!(resize.poll(290));
//! assert!(!resize.poll(400));
//! ```
//!
//! ## Throttle example
//!
//! ```rust
//! use understory_timing::Throttle;
//!
//! let mut scroll = Throttle::new(100);
//! assert!(scroll.try_acquire(0));
//! assert!(!scroll.try_acquire(50));
//! assert!(scroll.try_acquire(100));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod debounce;
mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;

/// A monotonic timestamp in milliseconds supplied by the host.
pub type Millis = u64;
