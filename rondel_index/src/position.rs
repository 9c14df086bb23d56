// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position classification: map a distance-from-active to a visual role.

use core::fmt;

/// Discrete visual role of an item relative to the active item.
///
/// Roles are derived from the signed distance-to-active on every read and
/// never stored; see [`classify`]. The [`ItemPosition::as_str`] names are
/// stable and intended for style hooks (for example a
/// `carousel-item-active` class).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemPosition {
    /// The item at distance 0, i.e. the current index. Exactly one item is
    /// active in any state.
    Active,
    /// The immediate predecessor (distance -1).
    Prev,
    /// The immediate successor (distance 1).
    Next,
    /// Further behind the active item, but still within the visible window.
    Before,
    /// Further ahead of the active item, but still within the visible window.
    After,
    /// Outside the visible window.
    Hidden,
}

impl ItemPosition {
    /// Stable lower-case name for style hooks.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Before => "before",
            Self::After => "after",
            Self::Hidden => "hidden",
        }
    }
}

impl fmt::Display for ItemPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a signed distance-from-active into an [`ItemPosition`].
///
/// The rules apply in priority order:
///
/// 1. distance 0 → [`ItemPosition::Active`]
/// 2. distance -1 → [`ItemPosition::Prev`]
/// 3. distance 1 → [`ItemPosition::Next`]
/// 4. `|distance| > items_per_view / 2 + 1` → [`ItemPosition::Hidden`]
/// 5. negative → [`ItemPosition::Before`]
/// 6. otherwise → [`ItemPosition::After`]
///
/// The ordering is significant: the exact-neighbor checks run before the
/// magnitude cutoff, so the items adjacent to active are never hidden, even
/// when `items_per_view` is 1.
///
/// ```rust
/// use rondel_index::{ItemPosition, classify};
///
/// assert_eq!(classify(0, 2), ItemPosition::Active);
/// assert_eq!(classify(-1, 2), ItemPosition::Prev);
/// assert_eq!(classify(2, 2), ItemPosition::After);
/// assert_eq!(classify(3, 2), ItemPosition::Hidden);
/// ```
#[must_use]
pub fn classify(distance: i64, items_per_view: usize) -> ItemPosition {
    match distance {
        0 => ItemPosition::Active,
        -1 => ItemPosition::Prev,
        1 => ItemPosition::Next,
        // For integer distances the strict comparison against the integer
        // half-window matches the fractional cutoff `per_view / 2 + 1` at
        // both parities of items_per_view.
        d if d.unsigned_abs() > (items_per_view / 2 + 1) as u64 => ItemPosition::Hidden,
        d if d < 0 => ItemPosition::Before,
        _ => ItemPosition::After,
    }
}
