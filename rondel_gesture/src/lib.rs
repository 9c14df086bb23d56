// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rondel_gesture --heading-base-level=0

//! Rondel Gesture: normalize raw pointer and key events into navigation intents.
//!
//! This crate provides two small, focused decoders for carousel-style
//! navigation input:
//!
//! - [`swipe`]: track a single in-progress pointer gesture and, when it
//!   ends, report per-axis swipe directions against a movement threshold.
//! - [`keys`]: map key identifiers to next/previous intents with a
//!   leading-edge throttle across repeated key-up events.
//!
//! ## Design Philosophy
//!
//! Like the rest of Rondel, these decoders are host-agnostic:
//!
//! - **No event system assumed**: hosts feed raw positions and key
//!   identifiers in whatever order their platform delivers them.
//! - **No clock owned**: key throttling takes the current time as a plain
//!   millisecond timestamp supplied by the caller.
//! - **Generic keys**: the key type is application-supplied; anything with
//!   equality works, from `&'static str` DOM-style names to a keycode enum.
//! - **Silent degradation**: a gesture end without a preceding start is a
//!   no-op result, never an error.
//!
//! ## Swipe decoding
//!
//! ```rust
//! # #[cfg(feature = "swipe")]
//! # fn example() {
//! use kurbo::Point;
//! use rondel_gesture::swipe::{SwipeDirection, SwipeTracker};
//!
//! let mut tracker = SwipeTracker::default();
//! tracker.begin(Point::new(200.0, 100.0));
//! tracker.update(Point::new(130.0, 110.0));
//!
//! let outcome = tracker.finish(50.0);
//! assert_eq!(outcome.horizontal, Some(SwipeDirection::Left));
//! assert_eq!(outcome.vertical, None);
//! # }
//! # #[cfg(feature = "swipe")] example();
//! ```
//!
//! ## Keyboard decoding
//!
//! ```rust
//! use rondel_gesture::keys::{KeyNav, NavIntent};
//!
//! let mut nav = KeyNav::new(
//!     [("ArrowLeft", NavIntent::Previous), ("ArrowRight", NavIntent::Next)],
//!     500,
//! );
//!
//! assert_eq!(nav.on_key_up(&"ArrowRight", 1_000), Some(NavIntent::Next));
//! // 10ms later: suppressed by the shared throttle window.
//! assert_eq!(nav.on_key_up(&"ArrowLeft", 1_010), None);
//! // 600ms after the first: the window has elapsed.
//! assert_eq!(nav.on_key_up(&"ArrowLeft", 1_600), Some(NavIntent::Previous));
//! ```
//!
//! ## Features
//!
//! - `swipe`: enable pointer swipe tracking (requires the `kurbo` dependency)
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod keys;

#[cfg(feature = "swipe")]
pub mod swipe;
