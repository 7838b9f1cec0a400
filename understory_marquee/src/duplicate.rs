// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::host::TrackSurface;

/// Appends one copy of the original items so the track content repeats.
///
/// Duplicating twice would make the rendered content three periods long while
/// the loop period still measures one, breaking the seamless wrap, so
/// [`LoopDuplicator::ensure`] only acts once per attach cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopDuplicator {
    original_count: Option<usize>,
}

impl LoopDuplicator {
    /// Creates a duplicator that has not touched any track yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Duplicates the items on first call and returns the original item count.
    ///
    /// Later calls leave the track alone and return the remembered count.
    pub fn ensure<S: TrackSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        if let Some(count) = self.original_count {
            return count;
        }
        let count = surface.item_count();
        surface.duplicate_items();
        self.original_count = Some(count);
        log::debug!("duplicated {count} marquee items for looping");
        count
    }

    /// Removes the duplicates appended by [`LoopDuplicator::ensure`].
    pub fn restore<S: TrackSurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(count) = self.original_count.take() {
            surface.truncate_items(count);
        }
    }

    /// Number of original items, once duplicated.
    #[must_use]
    pub fn original_count(&self) -> Option<usize> {
        self.original_count
    }

    /// Returns `true` once the track holds the duplicated copy.
    #[must_use]
    pub fn is_duplicated(&self) -> bool {
        self.original_count.is_some()
    }
}
