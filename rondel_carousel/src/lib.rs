// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rondel_carousel --heading-base-level=0

//! Rondel Carousel: a headless carousel controller.
//!
//! This crate composes the Rondel kernels into a complete carousel widget
//! core: a cyclic or clamped index over a strip of items, per-item visual
//! roles derived from the distance to the active item, and navigation via
//! swipes, key presses, click-to-select, and timed auto-advance.
//!
//! It deliberately does **not** render, lay out, animate, or own an event
//! loop. The rendering host is responsible for:
//!
//! - Owning the visual items and delivering raw events (pointer positions,
//!   key identifiers, clicks, timer ticks) in order.
//! - Rendering each item from the [`ItemView`] the controller derives
//!   (index, distance-to-active, [`ItemPosition`] role) — these are style
//!   hints, recomputed on every read, never cached.
//! - Guaranteeing at least one item exists before constructing a controller.
//!
//! ## Pieces
//!
//! - [`CarouselState`] + [`Action`] + [`apply`]: the two-transition state
//!   machine (increment by a signed delta, set to a target index), pure
//!   over the state record.
//! - [`CarouselConfig`], [`AutoPlay`], [`Axis`]: construction-time
//!   configuration with the conventional defaults.
//! - [`prepare_items`]: filter carousel-excluded items and duplicate the
//!   rest up to the minimum count the classifier needs in loop mode.
//! - [`Carousel`]: the controller owning the state record and wiring the
//!   gesture decoders, click handling, and auto-play to it.
//!
//! ## Minimal example
//!
//! ```rust
//! use rondel_carousel::{Carousel, CarouselConfig, ItemPosition, prepare_items};
//!
//! // Six labeled items, none excluded, default two-per-view window.
//! let items = prepare_items(["a", "b", "c", "d", "e", "f"], |_| false, 2);
//! let config = CarouselConfig::default();
//! let mut carousel = Carousel::new(config, items.len(), items.real_len());
//!
//! assert_eq!(carousel.active_index(), 0);
//!
//! // Stepping backward wraps in the default loop mode.
//! carousel.increment(-1);
//! assert_eq!(carousel.active_index(), 5);
//!
//! // The active item is the only one at distance zero.
//! let view = carousel.item_view(5);
//! assert_eq!(view.distance, 0);
//! assert_eq!(view.position, ItemPosition::Active);
//! ```
//!
//! ## Time and the event model
//!
//! The controller is single-threaded and event-driven: every operation is a
//! pure, synchronous computation applied before the next event, so there is
//! no read-modify-write hazard even under rapid input. Auto-play and key
//! throttling take caller-supplied millisecond timestamps; the host calls
//! [`Carousel::tick`] from its frame or timer callback. Reconfiguring
//! auto-play replaces the pending deadline, so a stale schedule can never
//! fire, and dropping the controller drops the schedule with it.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod autoplay;
mod config;
mod controller;
mod items;
mod state;

pub use autoplay::{AutoPlay, AutoPlayConfig};
pub use config::{Axis, CarouselConfig};
pub use controller::{Carousel, ClickResponse, ItemView};
pub use items::{PreparedItems, prepare_items};
pub use state::{Action, CarouselState, apply};

pub use rondel_gesture::keys::NavIntent;
pub use rondel_index::{IndexMode, ItemPosition};
