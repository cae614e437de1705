// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic simulated host for announcement bars.
//!
//! [`SimHost`] implements every `herald_core` capability trait on top of a
//! virtual millisecond clock. [`Simulation`] owns a bar running on a
//! `SimHost` and plays the role of the browser event loop: it advances time,
//! fires due intervals in order, and delivers hover, visibility, and viewport
//! events to whichever listeners the bar currently has registered.
//!
//! Listener registrations are kept as a multiset, so a bar that registered
//! the same listener twice would receive every event twice, exactly like a
//! DOM event target would.

#![no_std]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;

use herald_core::bar::AnnouncementBar;
use herald_core::config::BarConfig;
use herald_core::host::{
    Clock, ForegroundProvider, HoverProvider, Listener, ListenerHost, SlideView, TimerHost,
    TimerId, ViewportObserver,
};
use herald_core::time::{HostTime, duration_to_millis};
use herald_core::trace::{NoopSink, TraceSink};
use kurbo::Size;

/// A scheduled interval on the virtual clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimTimer {
    /// Handle returned to the bar.
    pub id: TimerId,
    /// Interval between firings, in milliseconds (at least 1).
    pub period_ms: u64,
    /// Next firing time, or [`NEVER`] once it lies past the end of the clock.
    pub due: HostTime,
}

/// Due time of an interval that will not fire again.
pub const NEVER: HostTime = HostTime(u64::MAX);

/// In-memory host with a virtual clock and directly settable signals.
#[derive(Clone, Debug)]
pub struct SimHost {
    now: HostTime,
    next_timer: u32,
    timers: Vec<SimTimer>,
    scheduled_total: u32,
    markers: Vec<Option<bool>>,
    marker_writes: usize,
    paused_marker: Option<bool>,
    hovered: bool,
    foreground: bool,
    viewport: Size,
    registrations: Vec<Listener>,
    listener_log: Vec<(Listener, bool)>,
}

impl SimHost {
    /// Creates a host with `slides` unmarked slides, a visible page, no
    /// hover, and the given viewport.
    #[must_use]
    pub fn new(slides: usize, viewport: Size) -> Self {
        Self {
            now: HostTime::ZERO,
            next_timer: 0,
            timers: Vec::new(),
            scheduled_total: 0,
            markers: vec![None; slides],
            marker_writes: 0,
            paused_marker: None,
            hovered: false,
            foreground: true,
            viewport,
            registrations: Vec::new(),
            listener_log: Vec::new(),
        }
    }

    /// Live intervals, in scheduling order.
    #[must_use]
    pub fn timers(&self) -> &[SimTimer] {
        &self.timers
    }

    /// Number of intervals ever scheduled.
    #[must_use]
    pub fn scheduled_total(&self) -> u32 {
        self.scheduled_total
    }

    /// Hidden marker of every slide; `None` for slides never written.
    #[must_use]
    pub fn markers(&self) -> &[Option<bool>] {
        &self.markers
    }

    /// Total number of slide marker writes.
    #[must_use]
    pub fn marker_writes(&self) -> usize {
        self.marker_writes
    }

    /// Indices of slides whose marker is currently "visible".
    #[must_use]
    pub fn visible_slides(&self) -> Vec<usize> {
        self.markers
            .iter()
            .enumerate()
            .filter_map(|(i, m)| (*m == Some(false)).then_some(i))
            .collect()
    }

    /// Last value written to the `paused` marker.
    #[must_use]
    pub fn paused_marker(&self) -> Option<bool> {
        self.paused_marker
    }

    /// How many times `listener` is currently registered.
    #[must_use]
    pub fn registrations(&self, listener: Listener) -> usize {
        self.registrations.iter().filter(|&&l| l == listener).count()
    }

    /// Every add (`true`) and remove (`false`) in call order.
    #[must_use]
    pub fn listener_log(&self) -> &[(Listener, bool)] {
        &self.listener_log
    }

    /// Current pointer hover signal.
    #[must_use]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Changes the hover signal without delivering an event.
    ///
    /// Ticks still sample it, so this models hover as seen at fire time.
    pub fn set_hover_signal(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Changes the page visibility signal without delivering an event.
    pub fn set_foreground_signal(&mut self, foreground: bool) {
        self.foreground = foreground;
    }

    fn earliest_due(&self, deadline: HostTime) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due != NEVER && t.due <= deadline)
            .min_by_key(|(_, t)| (t.due, t.id.0))
            .map(|(i, _)| i)
    }
}

impl Clock for SimHost {
    fn now(&self) -> HostTime {
        self.now
    }
}

impl TimerHost for SimHost {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        self.next_timer += 1;
        self.scheduled_total += 1;
        let id = TimerId(self.next_timer);
        let period_ms = duration_to_millis(period).max(1);
        self.timers.push(SimTimer {
            id,
            period_ms,
            due: self
                .now
                .checked_add(Duration::from_millis(period_ms))
                .unwrap_or(NEVER),
        });
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }
}

impl SlideView for SimHost {
    fn slide_count(&self) -> usize {
        self.markers.len()
    }

    fn set_slide_hidden(&mut self, index: usize, hidden: bool) {
        self.markers[index] = Some(hidden);
        self.marker_writes += 1;
    }

    fn set_paused_marker(&mut self, paused: bool) {
        self.paused_marker = Some(paused);
    }
}

impl ForegroundProvider for SimHost {
    fn is_foreground(&self) -> bool {
        self.foreground
    }
}

impl HoverProvider for SimHost {
    fn is_hovered(&self) -> bool {
        self.hovered
    }
}

impl ViewportObserver for SimHost {
    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

impl ListenerHost for SimHost {
    fn add_listener(&mut self, listener: Listener) {
        self.registrations.push(listener);
        self.listener_log.push((listener, true));
    }

    fn remove_listener(&mut self, listener: Listener) {
        if let Some(pos) = self.registrations.iter().position(|&l| l == listener) {
            self.registrations.swap_remove(pos);
        }
        self.listener_log.push((listener, false));
    }
}

/// A bar running on a [`SimHost`], driven like a browser event loop.
#[derive(Debug)]
pub struct Simulation<S: TraceSink = NoopSink> {
    bar: AnnouncementBar<SimHost, S>,
}

impl Simulation {
    /// Creates a detached simulation without tracing.
    #[must_use]
    pub fn new(slides: usize, viewport: Size, config: BarConfig) -> Self {
        Self::with_sink(slides, viewport, config, NoopSink)
    }
}

impl<S: TraceSink> Simulation<S> {
    /// Creates a detached simulation that reports to `sink`.
    #[must_use]
    pub fn with_sink(slides: usize, viewport: Size, config: BarConfig, sink: S) -> Self {
        Self {
            bar: AnnouncementBar::with_sink(SimHost::new(slides, viewport), config, sink),
        }
    }

    /// The simulated bar.
    #[must_use]
    pub fn bar(&self) -> &AnnouncementBar<SimHost, S> {
        &self.bar
    }

    /// The simulated bar, for calling its programmatic API.
    pub fn bar_mut(&mut self) -> &mut AnnouncementBar<SimHost, S> {
        &mut self.bar
    }

    /// The simulated host.
    #[must_use]
    pub fn host(&self) -> &SimHost {
        self.bar.host()
    }

    /// The simulated host, for changing signals silently.
    pub fn host_mut(&mut self) -> &mut SimHost {
        self.bar.host_mut()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> HostTime {
        self.bar.host().now
    }

    /// Attaches the bar.
    pub fn start(&mut self) {
        self.bar.start();
    }

    /// Detaches the bar.
    pub fn stop(&mut self) {
        self.bar.stop();
    }

    /// Advances the clock by `by`, firing every interval that comes due.
    ///
    /// The clock stops at `HostTime(u64::MAX)`.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now() + by;
        self.advance_to(target);
    }

    /// Advances the clock to `target`, firing due intervals in time order.
    ///
    /// Does nothing if `target` is in the past.
    pub fn advance_to(&mut self, target: HostTime) {
        while let Some(i) = self.bar.host().earliest_due(target) {
            let host = self.bar.host_mut();
            let timer = &mut host.timers[i];
            let (id, due) = (timer.id, timer.due);
            timer.due = due
                .checked_add(Duration::from_millis(timer.period_ms))
                .unwrap_or(NEVER);
            host.now = due;
            self.bar.on_tick(id);
        }
        let host = self.bar.host_mut();
        host.now = host.now.max(target);
    }

    /// Moves the pointer onto (`true`) or off (`false`) the bar.
    ///
    /// Each registered enter/leave listener receives the event.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.bar.host().hovered == hovered {
            return;
        }
        self.bar.host_mut().hovered = hovered;
        let listener = if hovered {
            Listener::PointerEnter
        } else {
            Listener::PointerLeave
        };
        for _ in 0..self.bar.host().registrations(listener) {
            if hovered {
                self.bar.on_pointer_enter();
            } else {
                self.bar.on_pointer_leave();
            }
        }
    }

    /// Shows (`true`) or hides (`false`) the host page.
    pub fn set_foreground(&mut self, foreground: bool) {
        if self.bar.host().foreground == foreground {
            return;
        }
        self.bar.host_mut().foreground = foreground;
        for _ in 0..self.bar.host().registrations(Listener::VisibilityChange) {
            self.bar.on_visibility_change();
        }
    }

    /// Resizes the viewport and notifies viewport listeners.
    ///
    /// Notification happens on every call, even if the width predicate did
    /// not flip, so callers can exercise redundant re-evaluation.
    pub fn resize(&mut self, viewport: Size) {
        self.bar.host_mut().viewport = viewport;
        for _ in 0..self.bar.host().registrations(Listener::ViewportChange) {
            self.bar.on_viewport_change();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::config::AutoplayConfig;

    const NARROW: Size = Size::new(360.0, 640.0);

    #[test]
    fn intervals_fire_once_per_period() {
        let mut host = SimHost::new(1, NARROW);
        let id = host.set_interval(Duration::from_millis(100));
        assert_eq!(host.timers()[0].due, HostTime(100));
        host.clear_interval(id);
        assert!(host.timers().is_empty());
    }

    #[test]
    fn advance_fires_due_ticks_in_order() {
        let mut sim = Simulation::new(3, NARROW, BarConfig::new(AutoplayConfig::from_secs(1)));
        sim.start();
        sim.advance(Duration::from_millis(3_500));
        assert_eq!(sim.bar().current(), 3);
        assert_eq!(sim.now(), HostTime(3_500));
        assert_eq!(sim.host().timers()[0].due, HostTime(4_000));
    }

    #[test]
    fn advance_saturates_at_the_end_of_the_clock() {
        let mut sim = Simulation::new(3, Size::new(900.0, 600.0), BarConfig::default());
        sim.start();
        sim.advance(Duration::from_millis(10));
        sim.advance(Duration::MAX);
        assert_eq!(sim.now(), HostTime(u64::MAX));
        sim.advance(Duration::from_secs(1));
        assert_eq!(sim.now(), HostTime(u64::MAX));
    }

    #[test]
    fn interval_past_the_end_of_the_clock_stops_firing() {
        let mut sim = Simulation::new(3, NARROW, BarConfig::new(AutoplayConfig::from_secs(1)));
        sim.host_mut().now = HostTime(u64::MAX - 1_500);
        sim.start();
        assert_eq!(sim.host().timers()[0].due, HostTime(u64::MAX - 500));

        sim.advance_to(HostTime(u64::MAX));
        assert_eq!(sim.bar().current(), 1, "fires once, then parks");
        assert_eq!(sim.host().timers()[0].due, NEVER);
        assert_eq!(sim.now(), HostTime(u64::MAX));
    }

    #[test]
    fn remove_listener_drops_one_registration() {
        let mut host = SimHost::new(0, NARROW);
        host.add_listener(Listener::PointerEnter);
        host.add_listener(Listener::PointerEnter);
        host.remove_listener(Listener::PointerEnter);
        assert_eq!(host.registrations(Listener::PointerEnter), 1);
        assert_eq!(host.listener_log().len(), 3);
    }

    #[test]
    fn hover_events_only_reach_registered_listeners() {
        let mut sim = Simulation::new(2, Size::new(900.0, 600.0), BarConfig::default());
        sim.start();
        // Wide: no pointer listeners, so hovering changes nothing.
        sim.set_hovered(true);
        assert!(sim.host().hovered());
        assert_eq!(sim.host().registrations(Listener::PointerEnter), 0);
    }
}
