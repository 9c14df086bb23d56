// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index arithmetic over a dense strip of `len` items.
//!
//! All functions take the strip length and an [`IndexMode`] and share one
//! caller contract: `len >= 1`. The host that owns the item sequence must
//! guarantee at least one item exists before asking for index math.

use crate::IndexMode;

/// Resolves an arbitrary signed index into `[0, len)`.
///
/// - [`IndexMode::Clamp`]: clamps `value` into `[0, len - 1]`.
/// - [`IndexMode::Wrap`]: Euclidean remainder, so the result is in
///   `[0, len)` even when `value` is negative.
///
/// # Panics
///
/// Panics if `len == 0`. An empty strip has no resolvable index; this is a
/// caller contract, not a recoverable error.
///
/// ```rust
/// use rondel_index::{IndexMode, resolve_index};
///
/// assert_eq!(resolve_index(-1, 6, IndexMode::Wrap), 5);
/// assert_eq!(resolve_index(-1, 6, IndexMode::Clamp), 0);
/// assert_eq!(resolve_index(9, 6, IndexMode::Wrap), 3);
/// assert_eq!(resolve_index(9, 6, IndexMode::Clamp), 5);
/// ```
#[must_use]
pub fn resolve_index(value: i64, len: usize, mode: IndexMode) -> usize {
    assert!(len >= 1, "index arithmetic requires at least one item");
    let len = len as i64;
    let resolved = match mode {
        IndexMode::Wrap => value.rem_euclid(len),
        IndexMode::Clamp => value.clamp(0, len - 1),
    };
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "resolved is in [0, len) and len came from a usize"
    )]
    {
        resolved as usize
    }
}

/// Advances `current` by a signed `delta` and resolves the result.
///
/// `delta` may be any integer; multi-step jumps are supported, not just
/// single steps. In wrap mode the result is periodic in `len`:
/// `advance_index(i, d + k * len as i64, len, IndexMode::Wrap)` is the same
/// for every `k`.
///
/// # Panics
///
/// Panics if `len == 0` (see [`resolve_index`]).
#[must_use]
pub fn advance_index(current: usize, delta: i64, len: usize, mode: IndexMode) -> usize {
    resolve_index(current as i64 + delta, len, mode)
}

/// Signed distance from `from` to the active index `to`.
///
/// - [`IndexMode::Clamp`]: plain difference `from - to`, unbounded in
///   magnitude.
/// - [`IndexMode::Wrap`]: the shortest signed circular path. The raw
///   difference is compared with its wrapped alternative (`raw - len` for
///   positive raw, `raw + len` otherwise) and the one with the strictly
///   smaller absolute value wins; when both paths are equally long the
///   wrapped alternative is returned.
///
/// The result magnitude never exceeds the raw difference magnitude.
///
/// # Panics
///
/// Panics if `len == 0`.
///
/// ```rust
/// use rondel_index::{IndexMode, signed_distance};
///
/// // Item 5 is one step behind item 0 on a 6-item circle.
/// assert_eq!(signed_distance(5, 0, 6, IndexMode::Wrap), -1);
/// // Without wrapping it is five steps ahead.
/// assert_eq!(signed_distance(5, 0, 6, IndexMode::Clamp), 5);
/// ```
#[must_use]
pub fn signed_distance(from: usize, to: usize, len: usize, mode: IndexMode) -> i64 {
    assert!(len >= 1, "index arithmetic requires at least one item");
    let raw = from as i64 - to as i64;
    match mode {
        IndexMode::Clamp => raw,
        IndexMode::Wrap => {
            let len = len as i64;
            let wrapped = if raw > 0 { raw - len } else { raw + len };
            if raw.abs() < wrapped.abs() { raw } else { wrapped }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_stays_in_range_for_both_modes() {
        for len in 1..8_usize {
            for value in -20..20_i64 {
                for mode in [IndexMode::Wrap, IndexMode::Clamp] {
                    let out = resolve_index(value, len, mode);
                    assert!(out < len, "resolve({value}, {len}, {mode:?}) out of range");
                }
            }
        }
    }

    #[test]
    fn wrap_resolve_matches_euclidean_remainder() {
        assert_eq!(resolve_index(0, 6, IndexMode::Wrap), 0);
        assert_eq!(resolve_index(6, 6, IndexMode::Wrap), 0);
        assert_eq!(resolve_index(-1, 6, IndexMode::Wrap), 5);
        assert_eq!(resolve_index(-7, 6, IndexMode::Wrap), 5);
        assert_eq!(resolve_index(13, 6, IndexMode::Wrap), 1);
    }

    #[test]
    fn clamp_resolve_saturates_at_both_ends() {
        assert_eq!(resolve_index(-5, 6, IndexMode::Clamp), 0);
        assert_eq!(resolve_index(3, 6, IndexMode::Clamp), 3);
        assert_eq!(resolve_index(99, 6, IndexMode::Clamp), 5);
    }

    #[test]
    fn single_item_strip_resolves_to_zero() {
        for value in -3..4_i64 {
            assert_eq!(resolve_index(value, 1, IndexMode::Wrap), 0);
            assert_eq!(resolve_index(value, 1, IndexMode::Clamp), 0);
        }
    }

    #[test]
    #[should_panic(expected = "at least one item")]
    fn empty_strip_is_a_contract_violation() {
        let _ = resolve_index(0, 0, IndexMode::Wrap);
    }

    #[test]
    fn advance_wraps_backward_from_zero() {
        assert_eq!(advance_index(0, -1, 6, IndexMode::Wrap), 5);
    }

    #[test]
    fn advance_clamps_at_boundaries() {
        assert_eq!(advance_index(0, -1, 6, IndexMode::Clamp), 0);
        assert_eq!(advance_index(5, 1, 6, IndexMode::Clamp), 5);
    }

    #[test]
    fn advance_is_periodic_in_wrap_mode() {
        for i in 0..6_usize {
            for d in -7..8_i64 {
                for k in -3..4_i64 {
                    assert_eq!(
                        advance_index(i, d, 6, IndexMode::Wrap),
                        advance_index(i, d + k * 6, 6, IndexMode::Wrap),
                        "periodicity broken at i={i} d={d} k={k}"
                    );
                }
            }
        }
    }

    #[test]
    fn advance_supports_multi_step_jumps() {
        assert_eq!(advance_index(1, 4, 6, IndexMode::Wrap), 5);
        assert_eq!(advance_index(1, 7, 6, IndexMode::Wrap), 2);
        assert_eq!(advance_index(1, 7, 6, IndexMode::Clamp), 5);
    }

    #[test]
    fn distance_picks_shortest_circular_path() {
        // 6-item circle around active index 0.
        assert_eq!(signed_distance(1, 0, 6, IndexMode::Wrap), 1);
        assert_eq!(signed_distance(2, 0, 6, IndexMode::Wrap), 2);
        assert_eq!(signed_distance(5, 0, 6, IndexMode::Wrap), -1);
        assert_eq!(signed_distance(4, 0, 6, IndexMode::Wrap), -2);
    }

    #[test]
    fn distance_ties_take_the_wrapped_path() {
        // Half way around an even circle both paths are 3 long; the strict
        // comparison means the wrapped alternative wins.
        assert_eq!(signed_distance(3, 0, 6, IndexMode::Wrap), -3);
        assert_eq!(signed_distance(0, 3, 6, IndexMode::Wrap), 3);
    }

    #[test]
    fn distance_magnitude_never_exceeds_raw_difference() {
        for len in 1..9_usize {
            for from in 0..len {
                for to in 0..len {
                    let raw = from as i64 - to as i64;
                    let wrapped = signed_distance(from, to, len, IndexMode::Wrap);
                    assert!(
                        wrapped.abs() <= raw.abs(),
                        "|{wrapped}| > |{raw}| at from={from} to={to} len={len}"
                    );
                    // Shortest path never exceeds half the circle (rounded up).
                    assert!(
                        wrapped.abs() * 2 <= len as i64 + 1,
                        "distance {wrapped} too long for len={len}"
                    );
                }
            }
        }
    }

    #[test]
    fn clamp_distance_is_the_plain_difference() {
        assert_eq!(signed_distance(5, 0, 6, IndexMode::Clamp), 5);
        assert_eq!(signed_distance(0, 5, 6, IndexMode::Clamp), -5);
        // Indices beyond the strip are still a plain difference.
        assert_eq!(signed_distance(9, 2, 6, IndexMode::Clamp), 7);
    }

    #[test]
    fn exactly_one_item_sits_at_distance_zero() {
        for len in 1..8_usize {
            for active in 0..len {
                for mode in [IndexMode::Wrap, IndexMode::Clamp] {
                    let zeros = (0..len)
                        .filter(|&i| signed_distance(i, active, len, mode) == 0)
                        .count();
                    assert_eq!(zeros, 1, "len={len} active={active} mode={mode:?}");
                    assert_eq!(signed_distance(active, active, len, mode), 0);
                }
            }
        }
    }
}
