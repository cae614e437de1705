// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The announcement bar state machine.
//!
//! [`AnnouncementBar`] combines the slide tracker, the autoplay state, the
//! listener set, and the mode gate behind the host's event entry points.
//!
//! # States
//!
//! ```text
//!                 start()
//!   Uninitialized ───────► Wide ◄──────────────► Narrow
//!         ▲                  (viewport flips)      │
//!         │ stop()                                 ├─ playing
//!         └──────── from any state ───────         ├─ suspended (hover / timer cleared)
//!                                                  └─ paused    (explicit, sticky)
//! ```
//!
//! - **Wide** — no timer, no hover/visibility listeners, every slide visible.
//! - **Narrow** — hover/visibility listeners attached, exactly one slide
//!   visible, and a recurring timer while neither suspended nor paused.
//!
//! Entering narrow mode re-applies the current slide's markers before
//! playback starts, so the all-visible state of wide mode never lingers.

use core::fmt;
use core::time::Duration;

use crate::autoplay::{ActiveTimer, Autoplay, TickOutcome};
use crate::config::{BarConfig, HiddenPolicy};
use crate::gate::{ModeGate, ViewportMode};
use crate::host::{Host, Listener, TimerId};
use crate::slides::{SlideTracker, display_index};
use crate::time::HostTime;
use crate::trace::{
    LifecycleEvent, LifecyclePhase, ListenerEvent, ModeEvent, NoopSink, PauseEvent, Shown,
    SlideEvent, TickEvent, TimerAction, TimerEvent, TraceSink, Tracer,
};
use crate::wiring::ListenerSet;

/// One announcement bar instance.
///
/// The host calls [`start`](Self::start) when the bar is attached and
/// [`stop`](Self::stop) when it is detached, and forwards timer firings and
/// listener events to the `on_*` methods. All other methods are the bar's
/// public programmatic API.
///
/// None of the methods fail. Degenerate input (no slides, no autoplay
/// interval, redundant calls) turns into a no-op.
pub struct AnnouncementBar<H: Host, S: TraceSink = NoopSink> {
    host: H,
    sink: S,
    config: BarConfig,
    slides: SlideTracker,
    autoplay: Autoplay,
    gate: ModeGate,
    listeners: ListenerSet,
    running: bool,
}

impl<H: Host> AnnouncementBar<H> {
    /// Creates a detached bar that discards trace events.
    #[must_use]
    pub fn new(host: H, config: BarConfig) -> Self {
        Self::with_sink(host, config, NoopSink)
    }
}

impl<H: Host, S: TraceSink> AnnouncementBar<H, S> {
    /// Creates a detached bar that reports to `sink`.
    #[must_use]
    pub fn with_sink(host: H, config: BarConfig, sink: S) -> Self {
        Self {
            host,
            sink,
            config,
            slides: SlideTracker::new(),
            autoplay: Autoplay::new(config.autoplay),
            gate: ModeGate::new(),
            listeners: ListenerSet::EMPTY,
            running: false,
        }
    }

    // -- Accessors --

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably, e.g. to change simulated signals.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the trace sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the trace sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns the configuration the bar was built with.
    #[must_use]
    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// Returns `true` between [`start`](Self::start) and [`stop`](Self::stop).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the applied viewport mode, or `None` while detached.
    #[must_use]
    pub fn mode(&self) -> Option<ViewportMode> {
        self.gate.mode()
    }

    /// Returns the attached listeners.
    #[must_use]
    pub fn listeners(&self) -> ListenerSet {
        self.listeners
    }

    /// Returns the explicit pause flag.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.autoplay.is_paused()
    }

    /// Returns `true` if an autoplay interval is configured.
    #[must_use]
    pub fn is_autoplay(&self) -> bool {
        self.autoplay.is_configured()
    }

    /// Returns the live timer, if any.
    #[must_use]
    pub fn timer(&self) -> Option<ActiveTimer> {
        self.autoplay.timer()
    }

    /// Returns the raw, unwrapped slide counter.
    #[must_use]
    pub fn current(&self) -> i64 {
        self.slides.current()
    }

    /// Returns the slide the counter points at, or `None` without slides.
    #[must_use]
    pub fn display_index(&self) -> Option<usize> {
        display_index(self.slides.current(), self.host.slide_count())
    }

    fn tracer(&mut self) -> Tracer<'_> {
        Tracer::new(&mut self.sink)
    }

    // -- Lifecycle --

    /// Attaches the bar: starts observing the viewport and applies the
    /// current mode immediately.
    ///
    /// Calling `start` on a running bar does nothing.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        let at = self.host.now();
        self.tracer().lifecycle(&LifecycleEvent {
            at,
            phase: LifecyclePhase::Started,
        });
        self.attach(Listener::ViewportChange);
        self.evaluate_viewport();
    }

    /// Detaches the bar: stops observing the viewport, removes the
    /// hover/visibility listeners, and clears the timer.
    ///
    /// The timer is cleared in every state, so none outlives the bar. A
    /// stopped bar only becomes active again through a fresh
    /// [`start`](Self::start), which re-evaluates the viewport from scratch.
    pub fn stop(&mut self) {
        self.detach(Listener::ViewportChange);
        for listener in Listener::INTERACTION {
            self.detach(listener);
        }
        self.suspend();
        self.gate.reset();
        if self.running {
            self.running = false;
            let at = self.host.now();
            self.tracer().lifecycle(&LifecycleEvent {
                at,
                phase: LifecyclePhase::Stopped,
            });
        }
        debug_assert!(self.listeners.is_empty(), "listeners leaked past stop");
    }

    // -- Host events --

    /// Viewport change notification. Re-evaluates the width predicate and
    /// switches modes if it flipped.
    pub fn on_viewport_change(&mut self) {
        if self.running {
            self.evaluate_viewport();
        }
    }

    /// Pointer entered the bar: suspends playback.
    pub fn on_pointer_enter(&mut self) {
        if self.listeners.contains(Listener::PointerEnter) {
            self.suspend();
        }
    }

    /// Pointer left the bar: resumes playback unless explicitly paused.
    pub fn on_pointer_leave(&mut self) {
        if self.listeners.contains(Listener::PointerLeave) {
            self.resume();
        }
    }

    /// Page visibility changed.
    ///
    /// A visible page resumes playback. A hidden page pauses or suspends it,
    /// according to [`HiddenPolicy`].
    pub fn on_visibility_change(&mut self) {
        if !self.listeners.contains(Listener::VisibilityChange) {
            return;
        }
        if self.host.is_foreground() {
            self.resume();
        } else {
            match self.config.hidden_policy {
                HiddenPolicy::Pause => self.pause(),
                HiddenPolicy::Suspend => self.suspend(),
            }
        }
    }

    /// A recurring timer fired.
    ///
    /// Hover and page visibility are sampled now, not when the timer was
    /// scheduled. A skipped tick leaves the counter and the timer untouched.
    /// Firings from timers that are no longer live are ignored.
    pub fn on_tick(&mut self, id: TimerId) {
        let at = self.host.now();
        let outcome = if self.autoplay.is_live(id) {
            TickOutcome::sample(self.host.is_hovered(), self.host.is_foreground())
        } else {
            TickOutcome::Stale
        };
        self.tracer().tick(&TickEvent { at, id, outcome });
        if outcome == TickOutcome::Advanced {
            self.advance(1);
        }
    }

    // -- Slides --

    /// Shows the next slide.
    pub fn next(&mut self) {
        self.advance(1);
    }

    /// Shows the previous slide.
    pub fn previous(&mut self) {
        self.advance(-1);
    }

    /// Moves the slide counter by `delta`; any magnitude wraps around.
    pub fn advance(&mut self, delta: i64) {
        let shown = self.slides.advance(delta, &mut self.host);
        self.trace_slide(shown.map(Shown::Single));
    }

    /// Stores `n` as the raw counter and shows the slide it maps to.
    ///
    /// With no slides, only the counter changes.
    pub fn set_current(&mut self, n: i64) {
        let shown = self.slides.set_current(n, &mut self.host);
        self.trace_slide(shown.map(Shown::Single));
    }

    fn trace_slide(&mut self, shown: Option<Shown>) {
        if let Some(shown) = shown {
            let at = self.host.now();
            let raw = self.slides.current();
            self.tracer().slide(&SlideEvent { at, raw, shown });
        }
    }

    // -- Playback --

    /// Starts autoplay at `interval`, or at the configured interval if `None`.
    ///
    /// Does nothing when neither is available. Otherwise clears the explicit
    /// pause flag and, while the bar is in narrow mode, replaces any live
    /// timer with a fresh one, so calling `play` twice still leaves a single
    /// timer.
    pub fn play(&mut self, interval: Option<Duration>) {
        let Some(period) = self.autoplay.resolve_period(interval) else {
            return;
        };
        self.set_paused(false);
        if !self.gate.mode().is_some_and(ViewportMode::is_interactive) {
            return;
        }
        let (cleared, scheduled) = self.autoplay.schedule(period, &mut self.host);
        let at = self.host.now();
        if let Some(cleared) = cleared {
            self.trace_timer(at, cleared, TimerAction::Cleared);
        }
        self.trace_timer(at, scheduled, TimerAction::Scheduled);
    }

    /// Sets the explicit pause flag and clears the timer.
    ///
    /// The pause is sticky: [`resume`](Self::resume) does nothing until
    /// [`play`](Self::play) clears the flag.
    pub fn pause(&mut self) {
        self.set_paused(true);
        self.suspend();
    }

    /// Clears the timer without touching the pause flag.
    pub fn suspend(&mut self) {
        if let Some(cleared) = self.autoplay.clear(&mut self.host) {
            let at = self.host.now();
            self.trace_timer(at, cleared, TimerAction::Cleared);
        }
    }

    /// Restarts autoplay with a full interval, unless autoplay is not
    /// configured or the bar is explicitly paused.
    pub fn resume(&mut self) {
        if !self.autoplay.is_configured() || self.autoplay.is_paused() {
            return;
        }
        self.suspend();
        self.play(None);
    }

    fn set_paused(&mut self, paused: bool) {
        let changed = self.autoplay.set_paused(paused);
        self.host.set_paused_marker(paused);
        if changed {
            let at = self.host.now();
            self.tracer().pause(&PauseEvent { at, paused });
        }
    }

    fn trace_timer(&mut self, at: HostTime, timer: ActiveTimer, action: TimerAction) {
        self.tracer().timer(&TimerEvent {
            at,
            id: timer.id,
            period: timer.period,
            action,
        });
    }

    // -- Mode gate and wiring --

    fn evaluate_viewport(&mut self) {
        let size = self.host.viewport_size();
        let observed = self.host.viewport_mode(&self.config.viewport);
        let Some(mode) = self.gate.evaluate(observed) else {
            return;
        };
        let at = self.host.now();
        self.tracer().mode(&ModeEvent {
            at,
            mode,
            width: size.width,
        });
        if mode.is_interactive() {
            self.enable();
        } else {
            self.disable();
        }
    }

    fn enable(&mut self) {
        for listener in Listener::INTERACTION {
            self.attach(listener);
        }
        let shown = self.slides.apply(&mut self.host);
        self.trace_slide(shown.map(Shown::Single));
        self.play(None);
    }

    fn disable(&mut self) {
        self.suspend();
        for listener in Listener::INTERACTION {
            self.detach(listener);
        }
        // Static layouts show every slide at once rather than rotating.
        SlideTracker::show_all(&mut self.host);
        if self.host.slide_count() > 0 {
            self.trace_slide(Some(Shown::All));
        }
        debug_assert!(
            self.listeners.interaction().is_empty() && self.autoplay.timer().is_none(),
            "wide mode must have no timer and no interaction listeners"
        );
    }

    fn attach(&mut self, listener: Listener) {
        if self.listeners.attach(listener, &mut self.host) {
            self.trace_listener(listener, true);
        }
    }

    fn detach(&mut self, listener: Listener) {
        if self.listeners.detach(listener, &mut self.host) {
            self.trace_listener(listener, false);
        }
    }

    fn trace_listener(&mut self, listener: Listener, attached: bool) {
        let at = self.host.now();
        self.tracer().listener(&ListenerEvent {
            at,
            listener,
            attached,
        });
    }
}

impl<H: Host, S: TraceSink> fmt::Debug for AnnouncementBar<H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnouncementBar")
            .field("config", &self.config)
            .field("slides", &self.slides)
            .field("autoplay", &self.autoplay)
            .field("mode", &self.gate.mode())
            .field("listeners", &self.listeners)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Size;

    use super::*;
    use crate::config::{AutoplayConfig, WidthPredicate};
    use crate::host::{
        Clock, ForegroundProvider, HoverProvider, ListenerHost, SlideView, TimerHost,
        ViewportObserver,
    };

    const NARROW: Size = Size::new(375.0, 800.0);
    const WIDE: Size = Size::new(1024.0, 800.0);

    struct FakeHost {
        hidden: Vec<bool>,
        paused_marker: bool,
        next_timer: u32,
        live_timers: Vec<(TimerId, Duration)>,
        hovered: bool,
        foreground: bool,
        viewport: Size,
        media_mode: Option<ViewportMode>,
        added: Vec<Listener>,
        removed: Vec<Listener>,
    }

    impl FakeHost {
        fn new(slides: usize, viewport: Size) -> Self {
            Self {
                hidden: vec![false; slides],
                paused_marker: false,
                next_timer: 0,
                live_timers: Vec::new(),
                hovered: false,
                foreground: true,
                viewport,
                media_mode: None,
                added: Vec::new(),
                removed: Vec::new(),
            }
        }

        fn visible(&self) -> Vec<usize> {
            self.hidden
                .iter()
                .enumerate()
                .filter_map(|(i, h)| (!h).then_some(i))
                .collect()
        }
    }

    impl Clock for FakeHost {
        fn now(&self) -> HostTime {
            HostTime::ZERO
        }
    }

    impl TimerHost for FakeHost {
        fn set_interval(&mut self, period: Duration) -> TimerId {
            self.next_timer += 1;
            let id = TimerId(self.next_timer);
            self.live_timers.push((id, period));
            id
        }

        fn clear_interval(&mut self, id: TimerId) {
            self.live_timers.retain(|&(t, _)| t != id);
        }
    }

    impl SlideView for FakeHost {
        fn slide_count(&self) -> usize {
            self.hidden.len()
        }

        fn set_slide_hidden(&mut self, index: usize, hidden: bool) {
            self.hidden[index] = hidden;
        }

        fn set_paused_marker(&mut self, paused: bool) {
            self.paused_marker = paused;
        }
    }

    impl ForegroundProvider for FakeHost {
        fn is_foreground(&self) -> bool {
            self.foreground
        }
    }

    impl HoverProvider for FakeHost {
        fn is_hovered(&self) -> bool {
            self.hovered
        }
    }

    impl ViewportObserver for FakeHost {
        fn viewport_size(&self) -> Size {
            self.viewport
        }

        fn viewport_mode(&self, predicate: &WidthPredicate) -> ViewportMode {
            self.media_mode
                .unwrap_or_else(|| predicate.classify(self.viewport))
        }
    }

    impl ListenerHost for FakeHost {
        fn add_listener(&mut self, listener: Listener) {
            self.added.push(listener);
        }

        fn remove_listener(&mut self, listener: Listener) {
            self.removed.push(listener);
        }
    }

    fn bar(slides: usize, viewport: Size, secs: u64) -> AnnouncementBar<FakeHost> {
        AnnouncementBar::new(
            FakeHost::new(slides, viewport),
            BarConfig::new(AutoplayConfig::from_secs(secs)),
        )
    }

    fn live_id(bar: &AnnouncementBar<FakeHost>) -> TimerId {
        bar.timer().expect("timer should be live").id
    }

    #[test]
    fn narrow_start_shows_first_slide_and_plays() {
        let mut bar = bar(3, NARROW, 5);
        bar.start();
        assert_eq!(bar.mode(), Some(ViewportMode::Narrow));
        assert_eq!(bar.host().visible(), vec![0]);
        assert_eq!(bar.host().live_timers.len(), 1);
        assert_eq!(bar.host().live_timers[0].1, Duration::from_secs(5));
        assert_eq!(bar.listeners().interaction(), ListenerSet::INTERACTION);
        assert!(bar.listeners().contains(Listener::ViewportChange));
    }

    #[test]
    fn wide_start_shows_everything_without_timer() {
        let mut bar = bar(3, WIDE, 5);
        bar.start();
        assert_eq!(bar.mode(), Some(ViewportMode::Wide));
        assert_eq!(bar.host().visible(), vec![0, 1, 2]);
        assert!(bar.timer().is_none());
        assert!(bar.listeners().interaction().is_empty());
        assert!(bar.listeners().contains(Listener::ViewportChange));
    }

    #[test]
    fn play_twice_keeps_one_timer() {
        let mut bar = bar(3, NARROW, 5);
        bar.start();
        bar.play(None);
        bar.play(None);
        assert_eq!(bar.host().live_timers.len(), 1);
        let id = live_id(&bar);
        bar.on_tick(id);
        assert_eq!(bar.current(), 1);
    }

    #[test]
    fn stale_tick_is_ignored() {
        let mut bar = bar(3, NARROW, 5);
        bar.start();
        let old = live_id(&bar);
        bar.resume();
        assert_ne!(live_id(&bar), old);
        bar.on_tick(old);
        assert_eq!(bar.current(), 0);
    }

    #[test]
    fn ticks_skip_on_hover_and_hidden() {
        let mut bar = bar(3, NARROW, 5);
        bar.start();
        let id = live_id(&bar);

        bar.host_mut().hovered = true;
        bar.on_tick(id);
        assert_eq!(bar.current(), 0);

        bar.host_mut().hovered = false;
        bar.host_mut().foreground = false;
        bar.on_tick(id);
        assert_eq!(bar.current(), 0);

        bar.host_mut().foreground = true;
        bar.on_tick(id);
        assert_eq!(bar.current(), 1);
        assert_eq!(bar.host().visible(), vec![1]);
    }

    #[test]
    fn pause_is_sticky_against_pointer_leave() {
        let mut bar = bar(3, NARROW, 5);
        bar.start();
        bar.pause();
        assert!(bar.is_paused());
        assert!(bar.host().paused_marker);
        assert!(bar.timer().is_none());

        bar.on_pointer_leave();
        bar.resume();
        assert!(bar.timer().is_none());

        bar.play(None);
        assert!(!bar.is_paused());
        assert!(!bar.host().paused_marker);
        assert!(bar.timer().is_some());
    }

    #[test]
    fn hover_suspends_and_leave_restarts() {
        let mut bar = bar(3, NARROW, 5);
        bar.start();
        let before = live_id(&bar);
        bar.on_pointer_enter();
        assert!(bar.timer().is_none());
        assert!(!bar.is_paused());
        bar.on_pointer_leave();
        assert!(bar.timer().is_some());
        assert_ne!(live_id(&bar), before);
    }

    #[test]
    fn hidden_page_pauses_by_default() {
        let mut bar = bar(3, NARROW, 5);
        bar.start();
        bar.host_mut().foreground = false;
        bar.on_visibility_change();
        assert!(bar.is_paused());
        bar.host_mut().foreground = true;
        bar.on_visibility_change();
        assert!(bar.timer().is_none(), "explicit pause survives visibility");
    }

    #[test]
    fn hidden_page_suspends_with_suspend_policy() {
        let mut bar = AnnouncementBar::new(
            FakeHost::new(3, NARROW),
            BarConfig::new(AutoplayConfig::from_secs(5)).with_hidden_policy(HiddenPolicy::Suspend),
        );
        bar.start();
        bar.host_mut().foreground = false;
        bar.on_visibility_change();
        assert!(!bar.is_paused());
        assert!(bar.timer().is_none());
        bar.host_mut().foreground = true;
        bar.on_visibility_change();
        assert!(bar.timer().is_some());
    }

    #[test]
    fn mode_flips_toggle_wiring() {
        let mut bar = bar(3, WIDE, 5);
        bar.start();
        bar.host_mut().viewport = NARROW;
        bar.on_viewport_change();
        assert_eq!(bar.host().visible(), vec![0]);
        assert!(bar.timer().is_some());

        bar.host_mut().viewport = WIDE;
        bar.on_viewport_change();
        assert_eq!(bar.host().visible(), vec![0, 1, 2]);
        assert!(bar.timer().is_none());
        assert!(bar.host().live_timers.is_empty());
        assert!(bar.listeners().interaction().is_empty());
    }

    #[test]
    fn host_reported_mode_wins_over_rounded_width() {
        // A zoomed page can report a rounded width of 500 while the media
        // query already matches the narrow layout.
        let mut bar = bar(3, Size::new(500.0, 800.0), 5);
        bar.start();
        assert_eq!(bar.mode(), Some(ViewportMode::Wide));

        bar.host_mut().media_mode = Some(ViewportMode::Narrow);
        bar.on_viewport_change();
        assert_eq!(bar.mode(), Some(ViewportMode::Narrow));
        assert_eq!(bar.host().visible(), vec![0]);
        assert!(bar.timer().is_some());
    }

    #[test]
    fn same_mode_twice_attaches_once() {
        let mut bar = bar(3, NARROW, 5);
        bar.start();
        bar.on_viewport_change();
        bar.on_viewport_change();
        let enters = bar
            .host()
            .added
            .iter()
            .filter(|&&l| l == Listener::PointerEnter)
            .count();
        assert_eq!(enters, 1);
    }

    #[test]
    fn stop_clears_everything_from_any_state() {
        let mut bar = bar(3, NARROW, 5);
        bar.start();
        bar.stop();
        assert!(bar.host().live_timers.is_empty());
        assert!(bar.listeners().is_empty());
        assert_eq!(bar.host().added.len(), bar.host().removed.len());
        assert_eq!(bar.mode(), None);

        // A stray play after stop must not leak a timer.
        bar.play(None);
        assert!(bar.host().live_timers.is_empty());
    }

    #[test]
    fn restart_after_stop_reapplies_mode() {
        let mut bar = bar(3, NARROW, 5);
        bar.start();
        bar.stop();
        bar.start();
        assert_eq!(bar.mode(), Some(ViewportMode::Narrow));
        assert_eq!(bar.host().live_timers.len(), 1);
    }

    #[test]
    fn no_autoplay_means_no_timer() {
        let mut bar = bar(3, NARROW, 0);
        bar.start();
        assert!(bar.timer().is_none());
        bar.resume();
        bar.on_pointer_leave();
        assert!(bar.timer().is_none());
        // An explicit interval still plays.
        bar.play(Some(Duration::from_millis(800)));
        assert_eq!(bar.timer().map(|t| t.period), Some(Duration::from_millis(800)));
    }

    #[test]
    fn empty_slides_never_touch_markers() {
        let mut bar = bar(0, NARROW, 5);
        bar.start();
        bar.next();
        bar.previous();
        bar.set_current(-42);
        assert_eq!(bar.display_index(), None);
        assert_eq!(bar.current(), -42);
        bar.host_mut().viewport = WIDE;
        bar.on_viewport_change();
        assert!(bar.host().visible().is_empty());
    }

    #[test]
    fn stepping_at_the_counter_limits_changes_slide() {
        let mut bar = bar(3, NARROW, 5);
        bar.start();
        bar.set_current(i64::MAX);
        let before = bar.display_index();
        bar.next();
        assert_eq!(before, Some(1));
        assert_eq!(bar.display_index(), Some(2));
        assert_eq!(bar.host().visible(), vec![2]);

        bar.set_current(i64::MIN);
        bar.previous();
        assert_eq!(bar.display_index(), Some(0));
        assert_eq!(bar.host().visible(), vec![0]);
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut bar = bar(4, NARROW, 5);
        bar.start();
        bar.previous();
        assert_eq!(bar.current(), -1);
        assert_eq!(bar.display_index(), Some(3));
        assert_eq!(bar.host().visible(), vec![3]);
    }
}
