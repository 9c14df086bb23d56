// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Boundary behavior for index arithmetic over a strip of `len` items.
///
/// This enum is shared by [`resolve_index`](crate::resolve_index),
/// [`advance_index`](crate::advance_index), and
/// [`signed_distance`](crate::signed_distance).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IndexMode {
    /// Modular arithmetic: indices wrap around, so the first and last items
    /// are adjacent. This is the looping-carousel behavior.
    #[default]
    Wrap,
    /// Saturating arithmetic: indices clamp into `[0, len - 1]` with no
    /// wraparound.
    Clamp,
}

impl IndexMode {
    /// Returns `true` in wrap (looping) mode.
    #[must_use]
    pub fn is_wrap(self) -> bool {
        self == Self::Wrap
    }
}
