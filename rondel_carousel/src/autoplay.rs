// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-play configuration and the deadline-based schedule behind it.
//!
//! The host owns the wall clock; the carousel only compares the timestamps
//! it is handed. [`AutoPlay`] is the construction-time input (a bare flag,
//! a bare interval, or a full config record); it resolves to an immutable
//! [`AutoPlayConfig`], and the controller keeps a single pending deadline
//! derived from it. Replacing the configuration replaces the deadline, so
//! cancellation is guaranteed on every reconfiguration; dropping the
//! controller drops the deadline with it.

/// Resolved auto-play settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoPlayConfig {
    /// Milliseconds between auto-advances.
    pub interval_ms: u64,
    /// Signed step applied on each advance.
    pub step: i64,
    /// Suspend auto-advance while the host reports the pointer hovering.
    pub stop_on_hover: bool,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3_000,
            step: 1,
            stop_on_hover: false,
        }
    }
}

/// Auto-play input as accepted by [`CarouselConfig`](crate::CarouselConfig).
///
/// Mirrors the conventional shorthand forms: a plain "on" resolves to the
/// default three-second single-step config, a bare number overrides only
/// the interval, and a full record is taken as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoPlay {
    /// No auto-advance.
    #[default]
    Off,
    /// Auto-advance with the default [`AutoPlayConfig`].
    Enabled,
    /// Auto-advance every given number of milliseconds, default step.
    Interval(u64),
    /// Fully specified settings.
    Config(AutoPlayConfig),
}

impl AutoPlay {
    /// Resolves the input form to settings, or `None` when off.
    #[must_use]
    pub fn resolve(self) -> Option<AutoPlayConfig> {
        match self {
            Self::Off => None,
            Self::Enabled => Some(AutoPlayConfig::default()),
            Self::Interval(interval_ms) => Some(AutoPlayConfig {
                interval_ms,
                ..AutoPlayConfig::default()
            }),
            Self::Config(config) => Some(config),
        }
    }
}

/// Single pending deadline driven by host-supplied timestamps.
///
/// The schedule arms itself lazily: the first [`AutoPlaySchedule::tick`]
/// after (re)configuration sets the deadline one interval out and fires
/// nothing. Each fire re-arms relative to the firing tick's timestamp.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AutoPlaySchedule {
    config: Option<AutoPlayConfig>,
    deadline_ms: Option<u64>,
}

impl AutoPlaySchedule {
    pub(crate) fn new(config: Option<AutoPlayConfig>) -> Self {
        Self {
            config,
            deadline_ms: None,
        }
    }

    pub(crate) fn config(&self) -> Option<AutoPlayConfig> {
        self.config
    }

    /// Replaces the settings and cancels any pending deadline.
    pub(crate) fn reconfigure(&mut self, config: Option<AutoPlayConfig>) {
        self.config = config;
        self.deadline_ms = None;
    }

    /// Drops the pending deadline; the next tick re-arms a full interval out.
    pub(crate) fn defer(&mut self) {
        self.deadline_ms = None;
    }

    /// Checks the deadline at `now_ms`, returning the step to apply when due.
    pub(crate) fn tick(&mut self, now_ms: u64) -> Option<i64> {
        let config = self.config?;
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = Some(now_ms.saturating_add(config.interval_ms));
                Some(config.step)
            }
            Some(_) => None,
            None => {
                self.deadline_ms = Some(now_ms.saturating_add(config.interval_ms));
                None
            }
        }
    }
}
