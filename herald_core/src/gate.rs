// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive mode classification and transition detection.
//!
//! The bar is either *wide* (static: every slide shown, no timer, no
//! listeners) or *narrow* (interactive: one slide at a time, autoplay,
//! hover/visibility handling). [`ModeGate`] remembers the last applied mode
//! so that re-evaluating an unchanged viewport is a no-op.

/// Which layout the viewport currently calls for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportMode {
    /// At or above the width threshold. The slideshow is disabled.
    Wide,
    /// Below the width threshold. The slideshow is enabled.
    Narrow,
}

impl ViewportMode {
    /// Returns `true` for [`ViewportMode::Narrow`].
    #[inline]
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Narrow)
    }
}

/// Remembers the applied [`ViewportMode`] and reports actual flips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeGate {
    applied: Option<ViewportMode>,
}

impl ModeGate {
    /// Creates an uninitialized gate.
    #[must_use]
    pub const fn new() -> Self {
        Self { applied: None }
    }

    /// Returns the last applied mode, or `None` before the first evaluation.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Option<ViewportMode> {
        self.applied
    }

    /// Records `observed` and returns it if it differs from the applied mode.
    ///
    /// The first evaluation after [`new`](Self::new) or [`reset`](Self::reset)
    /// always reports a transition.
    pub fn evaluate(&mut self, observed: ViewportMode) -> Option<ViewportMode> {
        if self.applied == Some(observed) {
            return None;
        }
        self.applied = Some(observed);
        Some(observed)
    }

    /// Forgets the applied mode.
    pub fn reset(&mut self) {
        self.applied = None;
    }
}
