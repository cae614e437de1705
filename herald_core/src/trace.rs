// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the playback state machine.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`AnnouncementBar`](crate::bar::AnnouncementBar) calls at each state
//! change. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use core::time::Duration;

use crate::autoplay::TickOutcome;
use crate::gate::ViewportMode;
use crate::host::{Listener, TimerId};
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Bar lifecycle transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    /// The host attached the bar (`start`).
    Started,
    /// The host detached the bar (`stop`).
    Stopped,
}

/// What happened to a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerAction {
    /// A recurring interval was scheduled.
    Scheduled,
    /// A recurring interval was cleared.
    Cleared,
}

/// Which slides were marked visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shown {
    /// Exactly one slide, by display index.
    Single(usize),
    /// Every slide (static layout fallback).
    All,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the bar is started or stopped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifecycleEvent {
    /// Host time of the transition.
    pub at: HostTime,
    /// Which transition.
    pub phase: LifecyclePhase,
}

/// Emitted when the applied viewport mode changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeEvent {
    /// Host time of the transition.
    pub at: HostTime,
    /// The newly applied mode.
    pub mode: ViewportMode,
    /// Viewport width that produced it.
    pub width: f64,
}

/// Emitted when a listener is attached or detached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListenerEvent {
    /// Host time of the change.
    pub at: HostTime,
    /// Which listener.
    pub listener: Listener,
    /// `true` for attach, `false` for detach.
    pub attached: bool,
}

/// Emitted when a timer is scheduled or cleared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerEvent {
    /// Host time of the change.
    pub at: HostTime,
    /// Host handle.
    pub id: TimerId,
    /// Interval the timer was scheduled with.
    pub period: Duration,
    /// Scheduled or cleared.
    pub action: TimerAction,
}

/// Emitted for every timer firing delivered to the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickEvent {
    /// Host time of the firing.
    pub at: HostTime,
    /// Which timer fired.
    pub id: TimerId,
    /// What the firing did.
    pub outcome: TickOutcome,
}

/// Emitted when slide markers are rewritten.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideEvent {
    /// Host time of the change.
    pub at: HostTime,
    /// Raw, unwrapped slide counter.
    pub raw: i64,
    /// Which slides are now visible.
    pub shown: Shown,
}

/// Emitted when the explicit pause flag changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PauseEvent {
    /// Host time of the change.
    pub at: HostTime,
    /// New value of the flag.
    pub paused: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the bar.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the bar is started or stopped.
    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        _ = e;
    }

    /// Called when the applied viewport mode changes.
    fn on_mode(&mut self, e: &ModeEvent) {
        _ = e;
    }

    /// Called when a listener is attached or detached.
    fn on_listener(&mut self, e: &ListenerEvent) {
        _ = e;
    }

    /// Called when a timer is scheduled or cleared.
    fn on_timer(&mut self, e: &TimerEvent) {
        _ = e;
    }

    /// Called for every timer firing.
    fn on_tick(&mut self, e: &TickEvent) {
        _ = e;
    }

    /// Called when slide markers are rewritten.
    fn on_slide(&mut self, e: &SlideEvent) {
        _ = e;
    }

    /// Called when the explicit pause flag changes.
    fn on_pause(&mut self, e: &PauseEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// An optional sink; `None` discards events.
impl<T: TraceSink> TraceSink for Option<T> {
    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        if let Some(s) = self {
            s.on_lifecycle(e);
        }
    }

    fn on_mode(&mut self, e: &ModeEvent) {
        if let Some(s) = self {
            s.on_mode(e);
        }
    }

    fn on_listener(&mut self, e: &ListenerEvent) {
        if let Some(s) = self {
            s.on_listener(e);
        }
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        if let Some(s) = self {
            s.on_timer(e);
        }
    }

    fn on_tick(&mut self, e: &TickEvent) {
        if let Some(s) = self {
            s.on_tick(e);
        }
    }

    fn on_slide(&mut self, e: &SlideEvent) {
        if let Some(s) = self {
            s.on_slide(e);
        }
    }

    fn on_pause(&mut self, e: &PauseEvent) {
        if let Some(s) = self {
            s.on_pause(e);
        }
    }
}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

/// Expands to a `Tracer` method that forwards one event to the sink.
macro_rules! emit {
    ($(#[$doc:meta])* $name:ident, $sink_fn:ident, $event:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$event) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$sink_fn(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    emit!(
        /// Emits a [`LifecycleEvent`].
        lifecycle, on_lifecycle, LifecycleEvent
    );
    emit!(
        /// Emits a [`ModeEvent`].
        mode, on_mode, ModeEvent
    );
    emit!(
        /// Emits a [`ListenerEvent`].
        listener, on_listener, ListenerEvent
    );
    emit!(
        /// Emits a [`TimerEvent`].
        timer, on_timer, TimerEvent
    );
    emit!(
        /// Emits a [`TickEvent`].
        tick, on_tick, TickEvent
    );
    emit!(
        /// Emits a [`SlideEvent`].
        slide, on_slide, SlideEvent
    );
    emit!(
        /// Emits a [`PauseEvent`].
        pause, on_pause, PauseEvent
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
