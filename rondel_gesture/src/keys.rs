// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard intent decoding with a shared leading-edge throttle.
//!
//! [`KeyNav`] holds a list of key → intent bindings, registered once at
//! construction, and decodes key-up events into [`NavIntent`]s. Repeated
//! events are rate-limited: once an intent fires, further key-up events are
//! suppressed until the throttle interval elapses, then the next match
//! fires and restarts the window. The window is shared across all bindings
//! rather than tracked per key, so rapid alternation between mapped keys
//! still yields at most one intent per interval.
//!
//! The key type is application-supplied; anything with equality works. Time
//! is a caller-supplied millisecond timestamp, so the decoder works under
//! any host clock.
//!
//! ## Minimal example
//!
//! ```
//! use rondel_gesture::keys::{KeyNav, NavIntent};
//!
//! let mut nav = KeyNav::new(
//!     [("ArrowLeft", NavIntent::Previous), ("ArrowRight", NavIntent::Next)],
//!     500,
//! );
//!
//! assert_eq!(nav.on_key_up(&"ArrowRight", 0), Some(NavIntent::Next));
//! // Inside the throttle window: suppressed, even for a different key.
//! assert_eq!(nav.on_key_up(&"ArrowLeft", 10), None);
//! // Window elapsed: fires and restarts the window.
//! assert_eq!(nav.on_key_up(&"ArrowLeft", 600), Some(NavIntent::Previous));
//! ```

use alloc::vec::Vec;

/// Directional navigation intent decoded from input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    /// Advance to the next item.
    Next,
    /// Retreat to the previous item.
    Previous,
}

impl NavIntent {
    /// The signed single-step delta this intent requests.
    #[must_use]
    pub fn step(self) -> i64 {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

/// Key-up decoder: bindings from key identifiers to [`NavIntent`]s plus a
/// leading-edge throttle.
#[derive(Clone, Debug)]
pub struct KeyNav<K> {
    bindings: Vec<(K, NavIntent)>,
    throttle_ms: u64,
    last_fired_ms: Option<u64>,
}

impl<K: PartialEq> KeyNav<K> {
    /// Creates a decoder from a binding list and a throttle interval.
    ///
    /// Bindings are fixed for the life of the decoder. A `throttle_ms` of 0
    /// disables rate limiting.
    #[must_use]
    pub fn new(bindings: impl IntoIterator<Item = (K, NavIntent)>, throttle_ms: u64) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            throttle_ms,
            last_fired_ms: None,
        }
    }

    /// Returns the configured throttle interval in milliseconds.
    #[must_use]
    pub fn throttle_ms(&self) -> u64 {
        self.throttle_ms
    }

    /// Decodes a key-up event at the given timestamp.
    ///
    /// Returns the bound intent when `key` is mapped and the throttle
    /// window has elapsed; firing restarts the window at `now_ms`. Events
    /// exactly at the window boundary fire. Unmapped keys return `None`
    /// without disturbing the window.
    pub fn on_key_up(&mut self, key: &K, now_ms: u64) -> Option<NavIntent> {
        if let Some(last) = self.last_fired_ms
            && now_ms.saturating_sub(last) < self.throttle_ms
        {
            return None;
        }
        let intent = self
            .bindings
            .iter()
            .find(|(bound, _)| bound == key)
            .map(|&(_, intent)| intent)?;
        self.last_fired_ms = Some(now_ms);
        Some(intent)
    }

    /// Forgets the throttle window, so the next mapped key-up fires
    /// immediately.
    pub fn reset_throttle(&mut self) {
        self.last_fired_ms = None;
    }
}
