// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide index tracking.
//!
//! [`SlideTracker`] stores the current slide as an unbounded signed counter.
//! The counter is not wrapped in storage; the visible slide is derived from
//! it on demand with [`display_index`], so `previous()` from slide 0 and
//! thousands of autoplay ticks both land on a valid slide. Only a step that
//! would leave the `i64` range reduces the counter to its display index
//! first.

use crate::host::SlideView;

/// Wraps a raw counter into `[0, len)`, or `None` when there are no slides.
///
/// Equivalent to `((raw % len) + len) % len`.
#[inline]
#[must_use]
pub fn display_index(raw: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    usize::try_from(raw.rem_euclid(len)).ok()
}

/// Reduces `raw + delta` modulo `len` without overflowing.
///
/// With no slides there is nothing to keep aligned, so the sum wraps.
fn rebase(raw: i64, delta: i64, len: usize) -> i64 {
    let Ok(len) = i64::try_from(len) else {
        return raw.wrapping_add(delta);
    };
    if len == 0 {
        return raw.wrapping_add(delta);
    }
    let sum = i128::from(raw) + i128::from(delta);
    // The remainder is below `len`, which fits in i64.
    i64::try_from(sum.rem_euclid(i128::from(len))).unwrap_or(0)
}

/// Raw slide counter plus the visibility it implies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideTracker {
    current: i64,
}

impl SlideTracker {
    /// Creates a tracker at slide 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: 0 }
    }

    /// Returns the raw, unwrapped counter.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> i64 {
        self.current
    }

    /// Stores `n` and marks exactly one slide visible.
    ///
    /// Returns the display index that was shown, or `None` when the view has
    /// no slides (in which case no marker is touched).
    pub fn set_current(&mut self, n: i64, view: &mut impl SlideView) -> Option<usize> {
        self.current = n;
        self.apply(view)
    }

    /// Moves the counter by `delta`. Any magnitude wraps around.
    ///
    /// When the sum leaves the `i64` range, the counter is first reduced to
    /// its display index, so the slide shown still moves by exactly `delta`.
    pub fn advance(&mut self, delta: i64, view: &mut impl SlideView) -> Option<usize> {
        let next = match self.current.checked_add(delta) {
            Some(next) => next,
            None => rebase(self.current, delta, view.slide_count()),
        };
        self.set_current(next, view)
    }

    /// Re-applies the markers for the stored counter.
    pub fn apply(&self, view: &mut impl SlideView) -> Option<usize> {
        let len = view.slide_count();
        let shown = display_index(self.current, len)?;
        for index in 0..len {
            view.set_slide_hidden(index, index != shown);
        }
        Some(shown)
    }

    /// Marks every slide visible, regardless of the counter.
    ///
    /// This is the static-layout fallback: wide viewports show all content at
    /// once instead of rotating it.
    pub fn show_all(view: &mut impl SlideView) {
        for index in 0..view.slide_count() {
            view.set_slide_hidden(index, false);
        }
    }
}
