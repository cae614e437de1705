// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed bar configuration.
//!
//! All configuration is resolved once, when the bar is constructed:
//!
//! - [`AutoplayConfig`] — whether a recurring timer may run, and how often
//! - [`WidthPredicate`] — the responsive boundary between wide and narrow
//!   layouts
//! - [`HiddenPolicy`] — what a hidden page does to playback
//! - [`BarConfig`] — the bundle handed to
//!   [`AnnouncementBar::new`](crate::bar::AnnouncementBar::new)
//!
//! Invalid input never produces an error. A malformed `autoplay` attribute
//! resolves to [`AutoplayConfig::Disabled`].

use core::time::Duration;

use kurbo::Size;

use crate::gate::ViewportMode;

/// Whether autoplay is available, and at which interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AutoplayConfig {
    /// No timer ever starts unless [`play`](crate::bar::AnnouncementBar::play)
    /// is given an explicit interval.
    #[default]
    Disabled,
    /// Advance one slide per interval. The interval is never zero.
    Interval(Duration),
}

impl AutoplayConfig {
    /// Resolves the `autoplay` attribute (whole seconds).
    ///
    /// Parsing is lenient: leading whitespace and an optional sign are
    /// accepted, then the leading run of decimal digits is read and anything
    /// after it is ignored (`"5s"` is five seconds). The result is
    /// [`Disabled`](Self::Disabled) when the attribute is absent, has no
    /// leading digits, is zero or negative, or overflows.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::Disabled;
        };
        let s = value.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 || negative {
            return Self::Disabled;
        }

        let mut secs: u64 = 0;
        for b in digits[..end].bytes() {
            let Some(next) = secs
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(b - b'0')))
            else {
                return Self::Disabled;
            };
            secs = next;
        }
        if secs.checked_mul(1000).is_none() {
            return Self::Disabled;
        }
        Self::from_secs(secs)
    }

    /// Autoplay every `secs` seconds; zero disables it.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        if secs == 0 {
            Self::Disabled
        } else {
            Self::Interval(Duration::from_secs(secs))
        }
    }

    /// Autoplay at an arbitrary interval; a zero duration disables it.
    #[must_use]
    pub const fn from_duration(interval: Duration) -> Self {
        if interval.is_zero() {
            Self::Disabled
        } else {
            Self::Interval(interval)
        }
    }

    /// Returns the configured interval, if autoplay is enabled.
    #[inline]
    #[must_use]
    pub const fn interval(self) -> Option<Duration> {
        match self {
            Self::Disabled => None,
            Self::Interval(d) => Some(d),
        }
    }

    /// Returns `true` if an interval is configured.
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Interval(_))
    }
}

/// Responsive boundary between the wide (static) and narrow (interactive)
/// layouts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthPredicate {
    /// Viewports at least this wide, in layout units, are [`ViewportMode::Wide`].
    pub min_wide_width: f64,
}

impl WidthPredicate {
    /// The reference boundary of 500 layout units.
    pub const REFERENCE: Self = Self {
        min_wide_width: 500.0,
    };

    /// Classifies a viewport size.
    #[must_use]
    pub fn classify(&self, viewport: Size) -> ViewportMode {
        if viewport.width >= self.min_wide_width {
            ViewportMode::Wide
        } else {
            ViewportMode::Narrow
        }
    }

    /// Writes the equivalent CSS media query, e.g. `(min-width: 500px)`.
    pub fn write_media_query(&self, out: &mut impl core::fmt::Write) -> core::fmt::Result {
        write!(out, "(min-width: {}px)", self.min_wide_width)
    }
}

impl Default for WidthPredicate {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// What happens to playback when the host page becomes hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HiddenPolicy {
    /// Hidden page → explicit [`pause`](crate::bar::AnnouncementBar::pause).
    ///
    /// The pause is sticky: the page becoming visible again calls
    /// [`resume`](crate::bar::AnnouncementBar::resume), which is a no-op
    /// while explicitly paused.
    #[default]
    Pause,
    /// Hidden page → transient [`suspend`](crate::bar::AnnouncementBar::suspend).
    ///
    /// Visibility returning resumes playback unless something else paused it.
    Suspend,
}

/// Configuration for an [`AnnouncementBar`](crate::bar::AnnouncementBar).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarConfig {
    /// Autoplay interval, or disabled.
    pub autoplay: AutoplayConfig,
    /// Wide/narrow boundary.
    pub viewport: WidthPredicate,
    /// Reaction to the host page becoming hidden.
    pub hidden_policy: HiddenPolicy,
}

impl BarConfig {
    /// Reference configuration: the given autoplay setting, a 500-unit
    /// boundary, and [`HiddenPolicy::Pause`].
    #[must_use]
    pub const fn new(autoplay: AutoplayConfig) -> Self {
        Self {
            autoplay,
            viewport: WidthPredicate::REFERENCE,
            hidden_policy: HiddenPolicy::Pause,
        }
    }

    /// Replaces the wide/narrow boundary.
    #[must_use]
    pub const fn with_viewport(mut self, viewport: WidthPredicate) -> Self {
        self.viewport = viewport;
        self
    }

    /// Replaces the hidden-page policy.
    #[must_use]
    pub const fn with_hidden_policy(mut self, hidden_policy: HiddenPolicy) -> Self {
        self.hidden_policy = hidden_policy;
        self
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self::new(AutoplayConfig::Disabled)
    }
}
