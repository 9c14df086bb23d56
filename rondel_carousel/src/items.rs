// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item sequence preparation: exclusion filtering and view-filling
//! duplication.
//!
//! The carousel works over opaque item handles; the host owns the actual
//! content. Before constructing a controller, the host runs its ordered
//! item sequence through [`prepare_items`], which:
//!
//! 1. Splits out items the exclusion predicate matches. Excluded items are
//!    retained separately so the host can still render them inert, outside
//!    the navigable strip.
//! 2. Duplicates the remaining run — appending full copies of it — until
//!    the strip holds at least `max(items_per_view * 2, 3)` items, so the
//!    position classifier never runs out of neighbors at the seam in loop
//!    mode.
//!
//! The duplication is deterministic and purely positional; duplicated slots
//! are real indices in the strip, and the controller's `real_len` records
//! how many genuine items exist behind them.

use alloc::vec::Vec;

/// An item sequence after exclusion filtering and view-filling duplication.
///
/// Produced by [`prepare_items`]; the length fields feed
/// [`Carousel::new`](crate::Carousel::new).
#[derive(Clone, Debug)]
pub struct PreparedItems<T> {
    items: Vec<T>,
    excluded: Vec<T>,
    real_len: usize,
}

impl<T> PreparedItems<T> {
    /// The navigable strip, duplicates included, in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items the exclusion predicate matched, in their original order.
    #[must_use]
    pub fn excluded(&self) -> &[T] {
        &self.excluded
    }

    /// Strip length after duplication.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when no genuine items survived filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count of genuine items (before duplication).
    #[must_use]
    pub fn real_len(&self) -> usize {
        self.real_len
    }
}

/// Filters and duplicates an item sequence for carousel use.
///
/// Items matching `is_excluded` are set aside; the remaining run is
/// repeated until the strip reaches `max(items_per_view * 2, 3)` entries.
/// An input with no genuine items yields an empty strip (and such a strip
/// must not be handed to [`Carousel::new`](crate::Carousel::new), which
/// requires at least one item).
///
/// ```rust
/// use rondel_carousel::prepare_items;
///
/// let prepared = prepare_items(["a", "b"], |_| false, 2);
/// // Two genuine items, repeated once to reach the 4-item minimum.
/// assert_eq!(prepared.items(), &["a", "b", "a", "b"]);
/// assert_eq!(prepared.real_len(), 2);
/// ```
pub fn prepare_items<T: Clone>(
    items: impl IntoIterator<Item = T>,
    mut is_excluded: impl FnMut(&T) -> bool,
    items_per_view: usize,
) -> PreparedItems<T> {
    let mut kept = Vec::new();
    let mut excluded = Vec::new();
    for item in items {
        if is_excluded(&item) {
            excluded.push(item);
        } else {
            kept.push(item);
        }
    }

    let real_len = kept.len();
    if real_len > 0 {
        let min_len = (items_per_view * 2).max(3);
        while kept.len() < min_len {
            // Append the original run, not the grown strip, so duplication
            // cycles the genuine sequence.
            for i in 0..real_len {
                let item = kept[i].clone();
                kept.push(item);
            }
        }
    }

    PreparedItems {
        items: kept,
        excluded,
        real_len,
    }
}
