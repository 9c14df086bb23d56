// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: owns the state record and wires navigation
//! input to it.
//!
//! The controller is driven entirely by the host's event callbacks. It
//! never blocks, owns no clock, and every entry point is a synchronous pure
//! computation over the current state, so events processed in delivery
//! order cannot race. External collaborators (the swipe tracker, key
//! decoder, auto-play schedule, click handler) only *request* transitions;
//! the state record itself is mutated exclusively here, through the
//! [`apply`] reducer.
//!
//! The navigation entry points return `true` when the active index changed,
//! so hosts know when to re-render.

use kurbo::Point;

use rondel_gesture::keys::{KeyNav, NavIntent};
use rondel_gesture::swipe::{SwipeDirection, SwipeTracker};
use rondel_index::{ItemPosition, classify, resolve_index, signed_distance};

use crate::autoplay::AutoPlaySchedule;
use crate::{Action, AutoPlay, Axis, CarouselConfig, CarouselState, apply};

/// Derived per-item view data, recomputed from the current state on every
/// read.
///
/// These are the style hints the presentation layer consumes: the item's
/// strip index, the active index, the signed distance between them, and the
/// classified role. Nothing here is cached; deriving on read keeps the data
/// impossible to invalidate stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemView {
    /// The item's position in the prepared strip.
    pub index: usize,
    /// The currently active index.
    pub active_index: usize,
    /// Signed distance from this item to the active one.
    pub distance: i64,
    /// Visual role classified from the distance.
    pub position: ItemPosition,
}

/// Outcome of a click on an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickResponse {
    /// The click selected a new item. The host must suppress the event's
    /// default behavior and further propagation so the click does not also
    /// activate content inside the item or ancestor handlers.
    Selected,
    /// The click was not handled (click navigation off, or the item is
    /// already active); let it proceed normally.
    Pass,
}

/// A headless carousel: index state plus navigation wiring.
///
/// `K` is the host's key-identifier type (see
/// [`CarouselConfig::key_bindings`]).
///
/// ```rust
/// use kurbo::Point;
/// use rondel_carousel::{Carousel, CarouselConfig};
///
/// let mut carousel = Carousel::new(CarouselConfig::default(), 6, 6);
///
/// // A leftward swipe past the 50px default threshold advances.
/// carousel.pointer_down(Point::new(200.0, 40.0));
/// carousel.pointer_move(Point::new(120.0, 44.0));
/// assert!(carousel.pointer_up());
/// assert_eq!(carousel.active_index(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Carousel<K = &'static str> {
    state: CarouselState,
    keys: KeyNav<K>,
    swipe: SwipeTracker,
    swipe_threshold: f64,
    axis: Axis,
    auto_play: AutoPlaySchedule,
    change_item_on_click: bool,
    hovered: bool,
}

impl<K: PartialEq> Carousel<K> {
    /// Builds a controller over a prepared strip of `len` items, of which
    /// `real_len` are genuine (see [`prepare_items`](crate::prepare_items)).
    ///
    /// The starting item passes through the clamp-or-wrap rule, so any
    /// signed value is accepted.
    ///
    /// # Panics
    ///
    /// Panics if `len == 0`; the host must guarantee at least one item
    /// before constructing a controller.
    #[must_use]
    pub fn new(config: CarouselConfig<K>, len: usize, real_len: usize) -> Self {
        let state = CarouselState {
            index: resolve_index(config.starting_item, len, config.mode),
            len,
            real_len,
            items_per_view: config.items_per_view,
            mode: config.mode,
        };
        Self {
            state,
            keys: KeyNav::new(config.key_bindings, config.keyboard_event_throttle_ms),
            swipe: SwipeTracker::default(),
            swipe_threshold: config.swipe_threshold,
            axis: config.axis,
            auto_play: AutoPlaySchedule::new(config.auto_play.resolve()),
            change_item_on_click: config.change_item_on_click,
            hovered: false,
        }
    }

    /// Snapshot of the current state record.
    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// The active item's index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.state.index
    }

    /// Steps the index by a signed delta. Returns `true` if it changed.
    pub fn increment(&mut self, delta: i64) -> bool {
        self.transition(Action::Increment(delta))
    }

    /// Moves the index to a target, resolved through the clamp-or-wrap
    /// rule. Returns `true` if it changed.
    pub fn set_index(&mut self, target: i64) -> bool {
        self.transition(Action::Set(target))
    }

    /// Derived view data for the item at `index`.
    ///
    /// Valid for any `index`; indices outside the strip simply classify by
    /// their distance like any other.
    #[must_use]
    pub fn item_view(&self, index: usize) -> ItemView {
        let distance = signed_distance(index, self.state.index, self.state.len, self.state.mode);
        ItemView {
            index,
            active_index: self.state.index,
            distance,
            position: classify(distance, self.state.items_per_view),
        }
    }

    /// Derived view data for every item in the strip, in order.
    pub fn item_views(&self) -> impl Iterator<Item = ItemView> + '_ {
        (0..self.state.len).map(|i| self.item_view(i))
    }

    /// Begins a pointer gesture at `pos`.
    pub fn pointer_down(&mut self, pos: Point) {
        self.swipe.begin(pos);
    }

    /// Updates the live pointer gesture. Ignored when none is in progress.
    pub fn pointer_move(&mut self, pos: Point) {
        self.swipe.update(pos);
    }

    /// Ends the pointer gesture, applying a recognized swipe on the
    /// configured axis. Returns `true` if the index changed.
    ///
    /// The off-axis result of the gesture is discarded; an end without a
    /// preceding start is a no-op.
    pub fn pointer_up(&mut self) -> bool {
        let outcome = self.swipe.finish(self.swipe_threshold);
        let direction = match self.axis {
            Axis::Horizontal => outcome.horizontal,
            Axis::Vertical => outcome.vertical,
        };
        let Some(direction) = direction else {
            return false;
        };
        // Content follows the pointer: dragging left/up brings the next
        // item into view, dragging right/down the previous one.
        let delta = match direction {
            SwipeDirection::Left | SwipeDirection::Up => 1,
            SwipeDirection::Right | SwipeDirection::Down => -1,
        };
        self.increment(delta)
    }

    /// Decodes a key-up event at `now_ms` and applies the bound intent.
    /// Returns `true` if the index changed.
    ///
    /// Repeats are rate-limited by the configured throttle; see
    /// [`KeyNav::on_key_up`].
    pub fn key_up(&mut self, key: &K, now_ms: u64) -> bool {
        match self.keys.on_key_up(key, now_ms) {
            Some(intent) => self.increment(intent.step()),
            None => false,
        }
    }

    /// Handles a click on the item at `index`.
    ///
    /// Selects the item when click navigation is on and it is not already
    /// active; see [`ClickResponse`] for the host's obligations.
    pub fn item_click(&mut self, index: usize) -> ClickResponse {
        if !self.change_item_on_click || index == self.state.index {
            return ClickResponse::Pass;
        }
        self.transition(Action::Set(index as i64));
        ClickResponse::Selected
    }

    /// Advances auto-play, given the host's current time in milliseconds.
    /// Returns `true` if the index changed.
    ///
    /// Call this from a frame or timer callback at whatever cadence is
    /// convenient; the schedule compares timestamps, it does not count
    /// calls. While the pointer hovers and the config says
    /// `stop_on_hover`, ticks defer the schedule so a full interval
    /// elapses after un-hover before the next advance.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.hovered && self.auto_play.config().is_some_and(|c| c.stop_on_hover) {
            self.auto_play.defer();
            return false;
        }
        match self.auto_play.tick(now_ms) {
            Some(step) => self.increment(step),
            None => false,
        }
    }

    /// Replaces the auto-play configuration.
    ///
    /// The pending deadline is cancelled unconditionally, so a schedule
    /// from the old configuration can never fire against the new one.
    pub fn set_auto_play(&mut self, auto_play: AutoPlay) {
        self.auto_play.reconfigure(auto_play.resolve());
    }

    /// Records whether the pointer is hovering the carousel.
    ///
    /// Only consulted when auto-play is configured with `stop_on_hover`.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Decoded navigation intents bypassing the throttle, for hosts that
    /// present their own next/previous affordances.
    pub fn apply_intent(&mut self, intent: NavIntent) -> bool {
        self.increment(intent.step())
    }

    fn transition(&mut self, action: Action) -> bool {
        let next = apply(self.state, action);
        let changed = next.index != self.state.index;
        self.state = next;
        changed
    }
}
