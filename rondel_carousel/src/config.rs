// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for a [`Carousel`](crate::Carousel).

use alloc::vec::Vec;

use rondel_gesture::keys::NavIntent;
use rondel_index::IndexMode;

use crate::AutoPlay;

/// Which gesture axis drives advance/retreat.
///
/// The swipe decoder reports both axes of a gesture; the controller
/// consumes the configured one and ignores the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Axis {
    /// Left/right swipes navigate.
    #[default]
    Horizontal,
    /// Up/down swipes navigate.
    Vertical,
}

/// Configuration for a [`Carousel`](crate::Carousel), supplied once at
/// construction.
///
/// `K` is the application's key-identifier type. The [`Default`]
/// implementation is provided for `&'static str` keys with the conventional
/// DOM names; hosts with their own keycode types build the struct directly.
#[derive(Clone, Debug)]
pub struct CarouselConfig<K = &'static str> {
    /// Visible-neighbor window width; feeds the hidden cutoff. Default 2.
    pub items_per_view: usize,
    /// Initial index, resolved through the clamp-or-wrap rule. Default 0.
    pub starting_item: i64,
    /// Wrap (looping) or clamp semantics everywhere. Default wrap.
    pub mode: IndexMode,
    /// Timed auto-advance. Default off.
    pub auto_play: AutoPlay,
    /// Whether clicking a non-active item selects it. Default true.
    pub change_item_on_click: bool,
    /// Minimum per-axis pointer displacement for a swipe, in pixels.
    /// Default 50.
    pub swipe_threshold: f64,
    /// Leading-edge throttle interval for key navigation, in milliseconds.
    /// Default 500.
    pub keyboard_event_throttle_ms: u64,
    /// Key identifier → intent bindings, registered once.
    pub key_bindings: Vec<(K, NavIntent)>,
    /// Which gesture axis navigates. Default horizontal.
    pub axis: Axis,
}

impl Default for CarouselConfig<&'static str> {
    fn default() -> Self {
        Self {
            items_per_view: 2,
            starting_item: 0,
            mode: IndexMode::Wrap,
            auto_play: AutoPlay::Off,
            change_item_on_click: true,
            swipe_threshold: 50.0,
            keyboard_event_throttle_ms: 500,
            key_bindings: alloc::vec![
                ("ArrowLeft", NavIntent::Previous),
                ("ArrowRight", NavIntent::Next),
            ],
            axis: Axis::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = CarouselConfig::default();
        assert_eq!(config.items_per_view, 2);
        assert_eq!(config.starting_item, 0);
        assert_eq!(config.mode, IndexMode::Wrap);
        assert_eq!(config.auto_play, AutoPlay::Off);
        assert!(config.change_item_on_click);
        assert_eq!(config.swipe_threshold, 50.0);
        assert_eq!(config.keyboard_event_throttle_ms, 500);
        assert_eq!(config.axis, Axis::Horizontal);
    }

    #[test]
    fn default_bindings_are_the_arrow_keys() {
        let config = CarouselConfig::default();
        assert_eq!(
            config.key_bindings,
            alloc::vec![
                ("ArrowLeft", NavIntent::Previous),
                ("ArrowRight", NavIntent::Next),
            ]
        );
    }
}
