// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_timing::{Debounce, Millis};

use crate::host::TrackSurface;

/// Measures the loop period and remeasures it after resize bursts settle.
///
/// Only the original items `0..original_count` are measured, so the track
/// must already hold its duplicates (or not) consistently; the duplicates
/// never contribute to the period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimensionTracker {
    original_count: usize,
    resize: Debounce,
    measurements: u64,
}

impl DimensionTracker {
    /// Creates a tracker for `original_count` items with the given resize debounce.
    #[must_use]
    pub fn new(original_count: usize, resize_debounce_ms: Millis) -> Self {
        Self {
            original_count,
            resize: Debounce::new(resize_debounce_ms),
            measurements: 0,
        }
    }

    /// Number of original items measured.
    #[must_use]
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// How many measurements have run so far.
    #[must_use]
    pub fn measurements(&self) -> u64 {
        self.measurements
    }

    /// Returns `true` while a resize burst is waiting to settle.
    #[must_use]
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Sums the margin-aware widths of the original items.
    ///
    /// Negative or non-finite widths count as zero.
    pub fn measure<S: TrackSurface + ?Sized>(&mut self, surface: &S) -> f64 {
        self.measurements += 1;
        let count = self.original_count.min(surface.item_count());
        (0..count)
            .map(|i| surface.item_outer_width(i))
            .filter(|w| w.is_finite() && *w > 0.0)
            .sum()
    }

    /// Records a resize event at `now`.
    pub fn on_resize(&mut self, now: Millis) {
        self.resize.trigger(now);
    }

    /// Remeasures once the resize burst has been quiet for the debounce window.
    pub fn poll<S: TrackSurface + ?Sized>(&mut self, now: Millis, surface: &S) -> Option<f64> {
        self.resize.poll(now).then(|| self.measure(surface))
    }

    /// Drops a pending remeasure.
    pub fn cancel(&mut self) {
        self.resize.cancel();
    }
}
