// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rondel_index --heading-base-level=0

//! Rondel Index: clamped and circular index arithmetic for carousel strips.
//!
//! This crate is the arithmetic kernel of Rondel. It knows nothing about
//! widgets, gestures, or rendering; it only answers three questions about a
//! dense strip of items indexed `0..len`:
//!
//! - [`resolve_index`]: where does an arbitrary (possibly negative,
//!   possibly out-of-range) index land under clamp or wrap semantics?
//! - [`advance_index`]: where does a signed step from a current index land?
//! - [`signed_distance`]: what is the signed distance between two indices,
//!   taking the shortest circular path in wrap mode?
//!
//! On top of those, [`classify`] maps a signed distance-from-active and an
//! items-per-view count to a discrete [`ItemPosition`] role that hosts use
//! as a style hint (`active`, `prev`, `next`, `before`, `after`, `hidden`).
//!
//! The two behaviors are selected by [`IndexMode`]:
//!
//! - [`IndexMode::Wrap`]: modular arithmetic; the first and last items are
//!   adjacent.
//! - [`IndexMode::Clamp`]: saturating arithmetic; indices stop at `0` and
//!   `len - 1`.
//!
//! ## Minimal example
//!
//! ```rust
//! use rondel_index::{IndexMode, ItemPosition, advance_index, classify, signed_distance};
//!
//! // Six items, wrap mode: stepping backward from 0 lands on the last item.
//! assert_eq!(advance_index(0, -1, 6, IndexMode::Wrap), 5);
//!
//! // Clamp mode saturates instead.
//! assert_eq!(advance_index(0, -1, 6, IndexMode::Clamp), 0);
//!
//! // Item 5 is one step behind the active item 0 on the circle.
//! let d = signed_distance(5, 0, 6, IndexMode::Wrap);
//! assert_eq!(d, -1);
//! assert_eq!(classify(d, 2), ItemPosition::Prev);
//! ```
//!
//! All functions here are pure and total, with one caller contract: `len`
//! must be at least 1. An empty strip has no meaningful index to resolve,
//! and violating the contract is a programming error that fails fast with a
//! panic rather than a recoverable condition.
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

mod arith;
mod mode;
mod position;

pub use arith::{advance_index, resolve_index, signed_distance};
pub use mode::IndexMode;
pub use position::{ItemPosition, classify};
