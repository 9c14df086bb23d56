// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe tracking: turn a pointer gesture into per-axis swipe directions.
//!
//! ## Usage
//!
//! 1) Call [`SwipeTracker::begin`] with the position of the initial press or
//!    touch.
//! 2) On each move event, call [`SwipeTracker::update`] with the new position.
//! 3) When the gesture ends, call [`SwipeTracker::finish`] with the movement
//!    threshold; it reports the per-axis outcome and clears the tracker.
//!
//! The two axes are judged independently: each fires when its net
//! displacement magnitude strictly exceeds the threshold, so a sufficiently
//! diagonal gesture reports a direction on *both* axes. Consumers that care
//! about a single axis (a horizontal carousel, say) read only that axis of
//! the [`SwipeOutcome`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use rondel_gesture::swipe::{SwipeDirection, SwipeTracker};
//!
//! let mut tracker = SwipeTracker::default();
//!
//! tracker.begin(Point::new(100.0, 100.0));
//! assert!(tracker.is_tracking());
//!
//! tracker.update(Point::new(40.0, 95.0));
//! let outcome = tracker.finish(50.0);
//!
//! assert_eq!(outcome.horizontal, Some(SwipeDirection::Left));
//! assert_eq!(outcome.vertical, None);
//! assert!(!tracker.is_tracking());
//! ```

use kurbo::{Point, Vec2};

/// Direction of a recognized swipe, named for the pointer's travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Net displacement toward negative X.
    Left,
    /// Net displacement toward positive X.
    Right,
    /// Net displacement toward negative Y.
    Up,
    /// Net displacement toward positive Y.
    Down,
}

/// Per-axis result of a finished gesture.
///
/// Both axes can be set at once: the axes are judged independently, and a
/// diagonal gesture that clears the threshold on both reports both. An
/// outcome with neither axis set means the gesture stayed under the
/// threshold (or never started).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwipeOutcome {
    /// `Left`/`Right` when the horizontal displacement cleared the threshold.
    pub horizontal: Option<SwipeDirection>,
    /// `Up`/`Down` when the vertical displacement cleared the threshold.
    pub vertical: Option<SwipeDirection>,
}

impl SwipeOutcome {
    /// Returns `true` when no axis cleared the threshold.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }
}

/// Tracks the start and live position of a single in-progress gesture.
///
/// The tracker holds state only while a gesture is live; [`SwipeTracker::finish`]
/// always clears it, so one value can decode any number of sequential
/// gestures.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    /// Position captured when the gesture began.
    start_pos: Option<Point>,
    /// Most recent pointer position during the gesture.
    last_pos: Option<Point>,
}

impl SwipeTracker {
    /// Starts tracking a gesture from the given position.
    ///
    /// Starting while a gesture is already live abandons the old one.
    pub fn begin(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a new pointer position for the live gesture.
    ///
    /// Ignored when no gesture is in progress (a move without a preceding
    /// start is not an error).
    pub fn update(&mut self, pos: Point) {
        if self.start_pos.is_some() {
            self.last_pos = Some(pos);
        }
    }

    /// Net displacement of the live gesture so far, if one is in progress.
    #[must_use]
    pub fn displacement(&self) -> Option<Vec2> {
        match (self.start_pos, self.last_pos) {
            (Some(start), Some(last)) => Some(last - start),
            _ => None,
        }
    }

    /// Returns `true` while a gesture is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Ends the gesture and reports the per-axis outcome.
    ///
    /// Each axis fires when its net displacement magnitude strictly exceeds
    /// `threshold`. Finishing with no captured start is a no-op and reports
    /// an empty outcome. The tracker is cleared either way.
    pub fn finish(&mut self, threshold: f64) -> SwipeOutcome {
        let displacement = self.displacement();
        self.start_pos = None;
        self.last_pos = None;

        let Some(d) = displacement else {
            return SwipeOutcome::default();
        };

        let horizontal = if d.x > threshold {
            Some(SwipeDirection::Right)
        } else if d.x < -threshold {
            Some(SwipeDirection::Left)
        } else {
            None
        };
        let vertical = if d.y > threshold {
            Some(SwipeDirection::Down)
        } else if d.y < -threshold {
            Some(SwipeDirection::Up)
        } else {
            None
        };

        SwipeOutcome {
            horizontal,
            vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_idle() {
        let tracker = SwipeTracker::default();
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.displacement(), None);
    }

    #[test]
    fn finish_without_start_is_a_no_op() {
        let mut tracker = SwipeTracker::default();
        tracker.update(Point::new(500.0, 500.0));
        let outcome = tracker.finish(50.0);
        assert!(outcome.is_empty());
    }

    #[test]
    fn horizontal_swipe_past_threshold_fires_one_direction() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(100.0, 100.0));
        tracker.update(Point::new(160.0, 110.0));

        // 60px right, 10px down, threshold 50: exactly one axis fires.
        let outcome = tracker.finish(50.0);
        assert_eq!(outcome.horizontal, Some(SwipeDirection::Right));
        assert_eq!(outcome.vertical, None);
    }

    #[test]
    fn leftward_displacement_reports_left() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(200.0, 100.0));
        tracker.update(Point::new(120.0, 100.0));
        assert_eq!(tracker.finish(50.0).horizontal, Some(SwipeDirection::Left));
    }

    #[test]
    fn vertical_directions_follow_sign() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(0.0, 0.0));
        tracker.update(Point::new(0.0, 80.0));
        assert_eq!(tracker.finish(50.0).vertical, Some(SwipeDirection::Down));

        tracker.begin(Point::new(0.0, 0.0));
        tracker.update(Point::new(0.0, -80.0));
        assert_eq!(tracker.finish(50.0).vertical, Some(SwipeDirection::Up));
    }

    #[test]
    fn displacement_at_threshold_does_not_fire() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(0.0, 0.0));
        tracker.update(Point::new(50.0, 0.0));
        assert!(tracker.finish(50.0).is_empty());
    }

    #[test]
    fn diagonal_gesture_fires_both_axes() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(0.0, 0.0));
        tracker.update(Point::new(-70.0, 90.0));

        let outcome = tracker.finish(50.0);
        assert_eq!(outcome.horizontal, Some(SwipeDirection::Left));
        assert_eq!(outcome.vertical, Some(SwipeDirection::Down));
    }

    #[test]
    fn net_displacement_is_what_counts() {
        // A long wander that returns near the start stays under threshold.
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(0.0, 0.0));
        tracker.update(Point::new(300.0, 0.0));
        tracker.update(Point::new(-200.0, 0.0));
        tracker.update(Point::new(10.0, 5.0));
        assert!(tracker.finish(50.0).is_empty());
    }

    #[test]
    fn finish_clears_state_for_the_next_gesture() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(0.0, 0.0));
        tracker.update(Point::new(100.0, 0.0));
        let _ = tracker.finish(50.0);
        assert!(!tracker.is_tracking());

        // A stray end after the gesture resolved is a no-op.
        assert!(tracker.finish(50.0).is_empty());
    }

    #[test]
    fn begin_without_moves_reports_zero_displacement() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(42.0, 7.0));
        assert_eq!(tracker.displacement(), Some(Vec2::new(0.0, 0.0)));
        assert!(tracker.finish(50.0).is_empty());
    }

    #[test]
    fn begin_overwrites_a_live_gesture() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(Point::new(0.0, 0.0));
        tracker.update(Point::new(500.0, 0.0));

        tracker.begin(Point::new(1_000.0, 0.0));
        tracker.update(Point::new(1_020.0, 0.0));
        assert!(tracker.finish(50.0).is_empty());
    }
}
