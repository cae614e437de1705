// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event fan-out.

use herald_core::trace::{
    LifecycleEvent, ListenerEvent, ModeEvent, PauseEvent, SlideEvent, TickEvent, TimerEvent,
    TraceSink,
};

/// A [`TraceSink`] that forwards every event to `A`, then to `B`.
///
/// A bar owns exactly one sink; wrap two in a `TeeSink` to both print and
/// record a run.
#[derive(Debug, Default)]
pub struct TeeSink<A, B> {
    /// First receiver.
    pub first: A,
    /// Second receiver.
    pub second: B,
}

impl<A: TraceSink, B: TraceSink> TeeSink<A, B> {
    /// Pairs two sinks.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Splits the tee back into its sinks.
    #[must_use]
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: TraceSink, B: TraceSink> TraceSink for TeeSink<A, B> {
    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        self.first.on_lifecycle(e);
        self.second.on_lifecycle(e);
    }

    fn on_mode(&mut self, e: &ModeEvent) {
        self.first.on_mode(e);
        self.second.on_mode(e);
    }

    fn on_listener(&mut self, e: &ListenerEvent) {
        self.first.on_listener(e);
        self.second.on_listener(e);
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        self.first.on_timer(e);
        self.second.on_timer(e);
    }

    fn on_tick(&mut self, e: &TickEvent) {
        self.first.on_tick(e);
        self.second.on_tick(e);
    }

    fn on_slide(&mut self, e: &SlideEvent) {
        self.first.on_slide(e);
        self.second.on_slide(e);
    }

    fn on_pause(&mut self, e: &PauseEvent) {
        self.first.on_pause(e);
        self.second.on_pause(e);
    }
}
