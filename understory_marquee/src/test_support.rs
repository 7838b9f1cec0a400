// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::host::TrackSurface;

const CAPACITY: usize = 16;

/// Fixed-capacity track used by the unit tests.
#[derive(Clone, Debug)]
pub(crate) struct ArraySurface {
    pub(crate) widths: [f64; CAPACITY],
    pub(crate) len: usize,
    pub(crate) offset: f64,
    pub(crate) duplicate_calls: u32,
}

impl ArraySurface {
    pub(crate) fn new(widths: &[f64]) -> Self {
        let mut out = [0.0; CAPACITY];
        out[..widths.len()].copy_from_slice(widths);
        Self {
            widths: out,
            len: widths.len(),
            offset: 0.0,
            duplicate_calls: 0,
        }
    }
}

impl TrackSurface for ArraySurface {
    fn item_count(&self) -> usize {
        self.len
    }

    fn duplicate_items(&mut self) {
        self.duplicate_calls += 1;
        let len = self.len;
        let copy = len.min(CAPACITY - len);
        self.widths.copy_within(0..copy, len);
        self.len += copy;
    }

    fn truncate_items(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    fn item_outer_width(&self, index: usize) -> f64 {
        self.widths[index]
    }

    fn scroll_width(&self) -> f64 {
        self.widths[..self.len].iter().sum()
    }

    fn set_offset(&mut self, x: f64) {
        self.offset = x;
    }
}
