// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! Playback state is laid out on three tracks: lifecycle and mode changes on
//! track 0, timers and ticks on track 1, and slide and pause changes on
//! track 2. Each scheduled timer additionally opens a `B`/`E` span that
//! closes when the timer is cleared.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use herald_core::time::HostTime;
use herald_core::trace::{LifecyclePhase, Shown, TimerAction};

use crate::recorder::{RecordedEvent, decode};

const TRACK_BAR: u32 = 0;
const TRACK_TIMER: u32 = 1;
const TRACK_SLIDES: u32 = 2;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        let ts = ms_to_us(recorded.at());
        match recorded {
            RecordedEvent::Lifecycle(e) => {
                let name = match e.phase {
                    LifecyclePhase::Started => "Start",
                    LifecyclePhase::Stopped => "Stop",
                };
                events.push(instant(name, "Lifecycle", ts, TRACK_BAR, json!({})));
            }
            RecordedEvent::Mode(e) => {
                events.push(instant(
                    "Mode",
                    "Lifecycle",
                    ts,
                    TRACK_BAR,
                    json!({
                        "mode": format!("{:?}", e.mode),
                        "width": e.width,
                    }),
                ));
            }
            RecordedEvent::Listener(e) => {
                events.push(instant(
                    if e.attached { "Attach" } else { "Detach" },
                    "Listener",
                    ts,
                    TRACK_BAR,
                    json!({ "listener": format!("{:?}", e.listener) }),
                ));
            }
            RecordedEvent::Timer(e) => {
                events.push(json!({
                    "ph": match e.action {
                        TimerAction::Scheduled => "B",
                        TimerAction::Cleared => "E",
                    },
                    "name": format!("Interval #{}", e.id.0),
                    "cat": "Timer",
                    "ts": ts,
                    "pid": 0,
                    "tid": TRACK_TIMER,
                    "args": {
                        "period_ms": u64::try_from(e.period.as_millis()).unwrap_or(u64::MAX),
                    }
                }));
            }
            RecordedEvent::Tick(e) => {
                events.push(instant(
                    "Tick",
                    "Timer",
                    ts,
                    TRACK_TIMER,
                    json!({
                        "timer": e.id.0,
                        "outcome": format!("{:?}", e.outcome),
                    }),
                ));
            }
            RecordedEvent::Slide(e) => {
                let shown = match e.shown {
                    Shown::Single(index) => json!(index),
                    Shown::All => json!("all"),
                };
                events.push(instant(
                    "Slide",
                    "Slides",
                    ts,
                    TRACK_SLIDES,
                    json!({ "current": e.raw, "shown": shown }),
                ));
            }
            RecordedEvent::Pause(e) => {
                events.push(instant(
                    if e.paused { "Pause" } else { "Unpause" },
                    "Slides",
                    ts,
                    TRACK_SLIDES,
                    json!({}),
                ));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn instant(name: &str, cat: &str, ts: f64, tid: u32, args: Value) -> Value {
    json!({
        "ph": "i",
        "name": name,
        "cat": cat,
        "ts": ts,
        "pid": 0,
        "tid": tid,
        "s": "t",
        "args": args,
    })
}

fn ms_to_us(t: HostTime) -> f64 {
    t.millis() as f64 * 1000.0
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::*;
    use crate::recorder::RecorderSink;
    use herald_core::autoplay::TickOutcome;
    use herald_core::host::TimerId;
    use herald_core::trace::{SlideEvent, TickEvent, TimerEvent, TraceSink};

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_timer(&TimerEvent {
            at: HostTime(0),
            id: TimerId(1),
            period: Duration::from_secs(5),
            action: TimerAction::Scheduled,
        });
        rec.on_tick(&TickEvent {
            at: HostTime(5_000),
            id: TimerId(1),
            outcome: TickOutcome::Advanced,
        });
        rec.on_slide(&SlideEvent {
            at: HostTime(5_000),
            raw: 1,
            shown: Shown::Single(1),
        });
        rec.on_timer(&TimerEvent {
            at: HostTime(7_500),
            id: TimerId(1),
            period: Duration::from_secs(5),
            action: TimerAction::Cleared,
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        // Should parse as a JSON array.
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 4);

        // Timer span opens and closes on the timer track.
        assert_eq!(parsed[0]["ph"], "B");
        assert_eq!(parsed[0]["name"], "Interval #1");
        assert_eq!(parsed[3]["ph"], "E");
        assert_eq!(parsed[3]["tid"], TRACK_TIMER);
        assert_eq!(parsed[3]["ts"], 7_500_000.0);

        assert_eq!(parsed[1]["name"], "Tick");
        assert_eq!(parsed[1]["args"]["outcome"], "Advanced");
        assert_eq!(parsed[2]["args"]["shown"], 1);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
