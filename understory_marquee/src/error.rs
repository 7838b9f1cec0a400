// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a marquee cannot attach to its host.
///
/// Both variants describe a structural problem with the host markup. Attaching
/// fails before any side effect: nothing is duplicated, no listener is
/// registered and no frame is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachError {
    /// The host has no track surface.
    MissingTrack,
    /// The track surface has no items to loop.
    EmptyItems,
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTrack => f.write_str("marquee host has no track surface"),
            Self::EmptyItems => f.write_str("marquee track has no items to loop"),
        }
    }
}

impl core::error::Error for AttachError {}
