// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are printed in seconds with millisecond precision.

use std::io::Write;

use herald_core::autoplay::TickOutcome;
use herald_core::gate::ViewportMode;
use herald_core::host::Listener;
use herald_core::time::HostTime;
use herald_core::trace::{
    LifecycleEvent, LifecyclePhase, ListenerEvent, ModeEvent, PauseEvent, Shown, SlideEvent,
    TickEvent, TimerAction, TimerEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Formats a host time as `s.mmm`.
fn secs(t: HostTime) -> String {
    let ms = t.millis();
    format!("{}.{:03}s", ms / 1000, ms % 1000)
}

fn listener_name(listener: Listener) -> &'static str {
    match listener {
        Listener::PointerEnter => "pointer-enter",
        Listener::PointerLeave => "pointer-leave",
        Listener::VisibilityChange => "visibility",
        Listener::ViewportChange => "viewport",
    }
}

fn outcome_name(outcome: TickOutcome) -> &'static str {
    match outcome {
        TickOutcome::Advanced => "advanced",
        TickOutcome::SkippedHover => "skipped (hover)",
        TickOutcome::SkippedHidden => "skipped (hidden)",
        TickOutcome::Stale => "stale",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        let phase = match e.phase {
            LifecyclePhase::Started => "started",
            LifecyclePhase::Stopped => "stopped",
        };
        let _ = writeln!(self.writer, "[{}] [bar] {phase}", secs(e.at));
    }

    fn on_mode(&mut self, e: &ModeEvent) {
        let mode = match e.mode {
            ViewportMode::Wide => "wide",
            ViewportMode::Narrow => "narrow",
        };
        let _ = writeln!(
            self.writer,
            "[{}] [mode] {mode} (width={:.0})",
            secs(e.at),
            e.width,
        );
    }

    fn on_listener(&mut self, e: &ListenerEvent) {
        let verb = if e.attached { "attach" } else { "detach" };
        let _ = writeln!(
            self.writer,
            "[{}] [listener] {verb} {}",
            secs(e.at),
            listener_name(e.listener),
        );
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        let verb = match e.action {
            TimerAction::Scheduled => "schedule",
            TimerAction::Cleared => "clear",
        };
        let _ = writeln!(
            self.writer,
            "[{}] [timer] {verb} id={} period={}ms",
            secs(e.at),
            e.id.0,
            e.period.as_millis(),
        );
    }

    fn on_tick(&mut self, e: &TickEvent) {
        let _ = writeln!(
            self.writer,
            "[{}] [tick] id={} {}",
            secs(e.at),
            e.id.0,
            outcome_name(e.outcome),
        );
    }

    fn on_slide(&mut self, e: &SlideEvent) {
        let _ = match e.shown {
            Shown::Single(index) => writeln!(
                self.writer,
                "[{}] [slide] current={} showing={index}",
                secs(e.at),
                e.raw,
            ),
            Shown::All => writeln!(self.writer, "[{}] [slide] showing=all", secs(e.at)),
        };
    }

    fn on_pause(&mut self, e: &PauseEvent) {
        let state = if e.paused { "paused" } else { "unpaused" };
        let _ = writeln!(self.writer, "[{}] [pause] {state}", secs(e.at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::host::TimerId;

    #[test]
    fn pretty_print_tick() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_tick(&TickEvent {
            at: HostTime(10_000),
            id: TimerId(2),
            outcome: TickOutcome::SkippedHover,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[10.000s] [tick] id=2 skipped (hover)\n");
    }

    #[test]
    fn pretty_print_slides() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_slide(&SlideEvent {
            at: HostTime(5_250),
            raw: -1,
            shown: Shown::Single(2),
        });
        sink.on_slide(&SlideEvent {
            at: HostTime(6_000),
            raw: -1,
            shown: Shown::All,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("[5.250s] [slide] current=-1 showing=2"), "got: {output}");
        assert!(output.contains("showing=all"), "got: {output}");
    }
}
