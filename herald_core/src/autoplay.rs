// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay playback state.
//!
//! [`Autoplay`] owns the explicit pause flag and the handle of the single
//! recurring timer. The timer handle is private and only changes through
//! [`Autoplay::schedule`] (which always clears before it sets) and
//! [`Autoplay::clear`], so a bar can never hold two live intervals.
//!
//! Whether an individual tick advances is decided separately by
//! [`TickOutcome::sample`] from signals read at fire time.

use core::time::Duration;

use crate::config::AutoplayConfig;
use crate::host::{TimerHost, TimerId};

/// A scheduled interval and the period it was scheduled with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActiveTimer {
    /// Host handle.
    pub id: TimerId,
    /// Interval between firings.
    pub period: Duration,
}

/// What a single timer firing did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// The slide counter advanced by one.
    Advanced,
    /// The pointer was over the bar; nothing changed.
    SkippedHover,
    /// The host page was hidden; nothing changed.
    SkippedHidden,
    /// The firing belonged to a timer that is no longer scheduled.
    Stale,
}

impl TickOutcome {
    /// Decides a live tick from freshly sampled signals.
    ///
    /// Hover is checked first, matching the order the signals are read in.
    #[must_use]
    pub const fn sample(hovered: bool, foreground: bool) -> Self {
        if hovered {
            Self::SkippedHover
        } else if !foreground {
            Self::SkippedHidden
        } else {
            Self::Advanced
        }
    }
}

/// Pause flag plus the at-most-one recurring timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Autoplay {
    config: AutoplayConfig,
    paused: bool,
    timer: Option<ActiveTimer>,
}

impl Autoplay {
    /// Creates idle playback state for the given configuration.
    #[must_use]
    pub const fn new(config: AutoplayConfig) -> Self {
        Self {
            config,
            paused: false,
            timer: None,
        }
    }

    /// Returns `true` if an autoplay interval is configured.
    #[inline]
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.config.is_enabled()
    }

    /// Returns the explicit pause flag.
    #[inline]
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns the live timer, if any.
    #[inline]
    #[must_use]
    pub const fn timer(&self) -> Option<ActiveTimer> {
        self.timer
    }

    /// Returns `true` if `id` is the live timer.
    #[inline]
    #[must_use]
    pub fn is_live(&self, id: TimerId) -> bool {
        self.timer.is_some_and(|t| t.id == id)
    }

    /// Picks the period for a `play` request.
    ///
    /// An explicit non-zero `requested` period wins; otherwise the configured
    /// interval is used. `None` means playback cannot start.
    #[must_use]
    pub fn resolve_period(&self, requested: Option<Duration>) -> Option<Duration> {
        requested
            .filter(|d| !d.is_zero())
            .or(self.config.interval())
    }

    /// Sets the explicit pause flag and returns `true` if it changed.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        let changed = self.paused != paused;
        self.paused = paused;
        changed
    }

    /// Replaces any live timer with a new one at `period`.
    ///
    /// Returns the timer that was cleared (if any) and the one now live.
    pub fn schedule(
        &mut self,
        period: Duration,
        timers: &mut impl TimerHost,
    ) -> (Option<ActiveTimer>, ActiveTimer) {
        let cleared = self.clear(timers);
        let id = timers.set_interval(period);
        let active = ActiveTimer { id, period };
        self.timer = Some(active);
        (cleared, active)
    }

    /// Clears the live timer, if any, and returns it.
    pub fn clear(&mut self, timers: &mut impl TimerHost) -> Option<ActiveTimer> {
        let cleared = self.timer.take()?;
        timers.clear_interval(cleared.id);
        Some(cleared)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct Timers {
        next: u32,
        live: Vec<TimerId>,
    }

    impl TimerHost for Timers {
        fn set_interval(&mut self, _period: Duration) -> TimerId {
            self.next += 1;
            let id = TimerId(self.next);
            self.live.push(id);
            id
        }

        fn clear_interval(&mut self, id: TimerId) {
            self.live.retain(|&t| t != id);
        }
    }

    #[test]
    fn schedule_clears_before_setting() {
        let mut timers = Timers::default();
        let mut autoplay = Autoplay::new(AutoplayConfig::from_secs(5));

        let (cleared, first) = autoplay.schedule(Duration::from_secs(5), &mut timers);
        assert_eq!(cleared, None);
        let (cleared, second) = autoplay.schedule(Duration::from_secs(5), &mut timers);
        assert_eq!(cleared, Some(first));
        assert_eq!(timers.live, [second.id]);
        assert!(autoplay.is_live(second.id));
        assert!(!autoplay.is_live(first.id));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut timers = Timers::default();
        let mut autoplay = Autoplay::new(AutoplayConfig::from_secs(1));
        let _ = autoplay.schedule(Duration::from_secs(1), &mut timers);
        assert!(autoplay.clear(&mut timers).is_some());
        assert!(autoplay.clear(&mut timers).is_none());
        assert!(timers.live.is_empty());
    }

    #[test]
    fn resolve_period_prefers_explicit_non_zero() {
        let configured = Autoplay::new(AutoplayConfig::from_secs(5));
        assert_eq!(
            configured.resolve_period(Some(Duration::from_millis(750))),
            Some(Duration::from_millis(750))
        );
        assert_eq!(
            configured.resolve_period(Some(Duration::ZERO)),
            Some(Duration::from_secs(5))
        );
        assert_eq!(configured.resolve_period(None), Some(Duration::from_secs(5)));

        let disabled = Autoplay::new(AutoplayConfig::Disabled);
        assert_eq!(disabled.resolve_period(None), None);
        assert_eq!(
            disabled.resolve_period(Some(Duration::from_secs(2))),
            Some(Duration::from_secs(2))
        );
    }

    #[test]
    fn set_paused_reports_changes() {
        let mut autoplay = Autoplay::default();
        assert!(autoplay.set_paused(true));
        assert!(!autoplay.set_paused(true));
        assert!(autoplay.is_paused());
        assert!(autoplay.set_paused(false));
    }

    #[test]
    fn tick_outcome_sampling() {
        assert_eq!(TickOutcome::sample(false, true), TickOutcome::Advanced);
        assert_eq!(TickOutcome::sample(true, true), TickOutcome::SkippedHover);
        assert_eq!(TickOutcome::sample(false, false), TickOutcome::SkippedHidden);
        assert_eq!(TickOutcome::sample(true, false), TickOutcome::SkippedHover);
    }
}
