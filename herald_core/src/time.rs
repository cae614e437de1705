// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host timestamps.
//!
//! [`HostTime`] is a point in time in whole milliseconds on the host's
//! monotonic clock (e.g. `performance.now()` in the browser, or a virtual
//! clock in simulation). Intervals are plain [`core::time::Duration`] values;
//! the helpers here convert between the two at millisecond resolution, which
//! is the resolution of every timer API the bar is scheduled on.

use core::fmt;
use core::ops::Add;
use core::time::Duration;

/// A point in time expressed as milliseconds on the host's monotonic clock.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// The clock origin.
    pub const ZERO: Self = Self(0);

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Checked addition of a duration, truncated to whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, duration: Duration) -> Option<Self> {
        match self.0.checked_add(duration_to_millis(duration)) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }
}

/// Saturates at the end of the clock instead of overflowing.
impl Add<Duration> for HostTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(duration_to_millis(rhs)))
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({}ms)", self.0)
    }
}

/// Converts a duration to whole milliseconds, saturating at `u64::MAX`.
#[inline]
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped to u64::MAX before narrowing"
)]
pub const fn duration_to_millis(duration: Duration) -> u64 {
    let ms = duration.as_millis();
    if ms > u64::MAX as u128 {
        u64::MAX
    } else {
        ms as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_time_duration_ops() {
        let t = HostTime(1000);
        assert_eq!((t + Duration::from_millis(250)).millis(), 1250);
        assert_eq!(t + Duration::MAX, HostTime(u64::MAX), "addition saturates");
        assert_eq!(
            HostTime(u64::MAX - 1) + Duration::from_millis(5),
            HostTime(u64::MAX)
        );
    }

    #[test]
    fn checked_add_overflow_is_none() {
        assert_eq!(HostTime(u64::MAX).checked_add(Duration::from_millis(1)), None);
        assert_eq!(
            HostTime(5).checked_add(Duration::from_secs(1)),
            Some(HostTime(1005))
        );
    }

    #[test]
    fn sub_millisecond_durations_truncate() {
        assert_eq!(duration_to_millis(Duration::from_micros(1999)), 1);
        assert_eq!(duration_to_millis(Duration::MAX), u64::MAX);
    }
}
