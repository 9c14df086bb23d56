// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel state record and its two transitions.

use rondel_index::{IndexMode, advance_index, resolve_index};

/// Snapshot of a carousel's navigable state.
///
/// `index` is always in `[0, len)`. `len` is the item count after
/// view-filling duplication (see [`prepare_items`](crate::prepare_items))
/// and is never less than `real_len`, the count of genuine items. The state
/// is owned exclusively by the [`Carousel`](crate::Carousel) controller and
/// changes only through [`apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    /// The active item's index.
    pub index: usize,
    /// Item count after view-filling duplication. At least 1.
    pub len: usize,
    /// Count of genuine (non-duplicated, non-excluded) items.
    pub real_len: usize,
    /// Visible-neighbor window width; feeds the hidden cutoff.
    pub items_per_view: usize,
    /// Wrap or clamp semantics for all index arithmetic.
    pub mode: IndexMode,
}

/// A requested state transition.
///
/// These are the only two transitions the carousel defines; anything else a
/// host might want (jump to start, advance a page) is expressed through
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Step the index by a signed delta, wrapping or clamping per the mode.
    Increment(i64),
    /// Move the index to a target, resolved through the same rule.
    Set(i64),
}

/// Applies an [`Action`] to a state, returning the successor state.
///
/// Pure: only `index` can change, and the result depends on nothing but the
/// inputs.
///
/// ```rust
/// use rondel_carousel::{Action, CarouselState, IndexMode, apply};
///
/// let state = CarouselState {
///     index: 0,
///     len: 6,
///     real_len: 6,
///     items_per_view: 2,
///     mode: IndexMode::Wrap,
/// };
/// assert_eq!(apply(state, Action::Increment(-1)).index, 5);
/// assert_eq!(apply(state, Action::Set(42)).index, 0);
/// ```
#[must_use]
pub fn apply(state: CarouselState, action: Action) -> CarouselState {
    let index = match action {
        Action::Increment(delta) => advance_index(state.index, delta, state.len, state.mode),
        Action::Set(target) => resolve_index(target, state.len, state.mode),
    };
    CarouselState { index, ..state }
}
