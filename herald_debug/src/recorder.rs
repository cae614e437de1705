// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Timer periods are stored in whole milliseconds.

use core::time::Duration;

use herald_core::autoplay::TickOutcome;
use herald_core::gate::ViewportMode;
use herald_core::host::{Listener, TimerId};
use herald_core::time::{HostTime, duration_to_millis};
use herald_core::trace::{
    LifecycleEvent, LifecyclePhase, ListenerEvent, ModeEvent, PauseEvent, Shown, SlideEvent,
    TickEvent, TimerAction, TimerEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_LIFECYCLE: u8 = 1;
const TAG_MODE: u8 = 2;
const TAG_LISTENER: u8 = 3;
const TAG_TIMER: u8 = 4;
const TAG_TICK: u8 = 5;
const TAG_SLIDE: u8 = 6;
const TAG_PAUSE: u8 = 7;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Decodes everything recorded so far.
    pub fn events(&self) -> DecodeIter<'_> {
        decode(&self.buf)
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_i64(&mut self, v: i64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_header(&mut self, tag: u8, at: HostTime) {
        self.write_u8(tag);
        self.write_u64(at.millis());
    }

    fn write_listener(&mut self, l: Listener) {
        self.write_u8(match l {
            Listener::PointerEnter => 0,
            Listener::PointerLeave => 1,
            Listener::VisibilityChange => 2,
            Listener::ViewportChange => 3,
        });
    }

    fn write_outcome(&mut self, o: TickOutcome) {
        self.write_u8(match o {
            TickOutcome::Advanced => 0,
            TickOutcome::SkippedHover => 1,
            TickOutcome::SkippedHidden => 2,
            TickOutcome::Stale => 3,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        self.write_header(TAG_LIFECYCLE, e.at);
        self.write_bool(e.phase == LifecyclePhase::Stopped);
    }

    fn on_mode(&mut self, e: &ModeEvent) {
        self.write_header(TAG_MODE, e.at);
        self.write_bool(e.mode == ViewportMode::Narrow);
        self.write_u64(e.width.to_bits());
    }

    fn on_listener(&mut self, e: &ListenerEvent) {
        self.write_header(TAG_LISTENER, e.at);
        self.write_listener(e.listener);
        self.write_bool(e.attached);
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        self.write_header(TAG_TIMER, e.at);
        self.write_u32(e.id.0);
        self.write_u64(duration_to_millis(e.period));
        self.write_bool(e.action == TimerAction::Cleared);
    }

    fn on_tick(&mut self, e: &TickEvent) {
        self.write_header(TAG_TICK, e.at);
        self.write_u32(e.id.0);
        self.write_outcome(e.outcome);
    }

    fn on_slide(&mut self, e: &SlideEvent) {
        self.write_header(TAG_SLIDE, e.at);
        self.write_i64(e.raw);
        match e.shown {
            Shown::Single(index) => {
                self.write_u8(1);
                self.write_u64(u64::try_from(index).unwrap_or(u64::MAX));
            }
            Shown::All => {
                self.write_u8(0);
                self.write_u64(0);
            }
        }
    }

    fn on_pause(&mut self, e: &PauseEvent) {
        self.write_header(TAG_PAUSE, e.at);
        self.write_bool(e.paused);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`LifecycleEvent`].
    Lifecycle(LifecycleEvent),
    /// A [`ModeEvent`].
    Mode(ModeEvent),
    /// A [`ListenerEvent`].
    Listener(ListenerEvent),
    /// A [`TimerEvent`].
    Timer(TimerEvent),
    /// A [`TickEvent`].
    Tick(TickEvent),
    /// A [`SlideEvent`].
    Slide(SlideEvent),
    /// A [`PauseEvent`].
    Pause(PauseEvent),
}

impl RecordedEvent {
    /// Host time the event was emitted at.
    #[must_use]
    pub fn at(&self) -> HostTime {
        match self {
            Self::Lifecycle(e) => e.at,
            Self::Mode(e) => e.at,
            Self::Listener(e) => e.at,
            Self::Timer(e) => e.at,
            Self::Tick(e) => e.at,
            Self::Slide(e) => e.at,
            Self::Pause(e) => e.at,
        }
    }
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[v]| v)
    }

    fn read_bool(&mut self) -> Option<bool> {
        self.read_u8().map(|v| v != 0)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_i64(&mut self) -> Option<i64> {
        self.take().map(i64::from_le_bytes)
    }

    fn read_time(&mut self) -> Option<HostTime> {
        self.read_u64().map(HostTime)
    }

    fn read_listener(&mut self) -> Option<Listener> {
        Some(match self.read_u8()? {
            0 => Listener::PointerEnter,
            1 => Listener::PointerLeave,
            2 => Listener::VisibilityChange,
            _ => Listener::ViewportChange,
        })
    }

    fn read_outcome(&mut self) -> Option<TickOutcome> {
        Some(match self.read_u8()? {
            0 => TickOutcome::Advanced,
            1 => TickOutcome::SkippedHover,
            2 => TickOutcome::SkippedHidden,
            _ => TickOutcome::Stale,
        })
    }

    fn decode_lifecycle(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Lifecycle(LifecycleEvent {
            at: self.read_time()?,
            phase: if self.read_bool()? {
                LifecyclePhase::Stopped
            } else {
                LifecyclePhase::Started
            },
        }))
    }

    fn decode_mode(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Mode(ModeEvent {
            at: self.read_time()?,
            mode: if self.read_bool()? {
                ViewportMode::Narrow
            } else {
                ViewportMode::Wide
            },
            width: f64::from_bits(self.read_u64()?),
        }))
    }

    fn decode_listener(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Listener(ListenerEvent {
            at: self.read_time()?,
            listener: self.read_listener()?,
            attached: self.read_bool()?,
        }))
    }

    fn decode_timer(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Timer(TimerEvent {
            at: self.read_time()?,
            id: TimerId(self.read_u32()?),
            period: Duration::from_millis(self.read_u64()?),
            action: if self.read_bool()? {
                TimerAction::Cleared
            } else {
                TimerAction::Scheduled
            },
        }))
    }

    fn decode_tick(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Tick(TickEvent {
            at: self.read_time()?,
            id: TimerId(self.read_u32()?),
            outcome: self.read_outcome()?,
        }))
    }

    fn decode_slide(&mut self) -> Option<RecordedEvent> {
        let at = self.read_time()?;
        let raw = self.read_i64()?;
        let single = self.read_bool()?;
        let index = usize::try_from(self.read_u64()?).ok()?;
        let shown = if single {
            Shown::Single(index)
        } else {
            Shown::All
        };
        Some(RecordedEvent::Slide(SlideEvent { at, raw, shown }))
    }

    fn decode_pause(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Pause(PauseEvent {
            at: self.read_time()?,
            paused: self.read_bool()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_LIFECYCLE => self.decode_lifecycle(),
            TAG_MODE => self.decode_mode(),
            TAG_LISTENER => self.decode_listener(),
            TAG_TIMER => self.decode_timer(),
            TAG_TICK => self.decode_tick(),
            TAG_SLIDE => self.decode_slide(),
            TAG_PAUSE => self.decode_pause(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_a_playback_sequence() {
        let mut rec = RecorderSink::new();
        let timer = TimerEvent {
            at: HostTime(0),
            id: TimerId(1),
            period: Duration::from_secs(5),
            action: TimerAction::Scheduled,
        };
        let tick = TickEvent {
            at: HostTime(5_000),
            id: TimerId(1),
            outcome: TickOutcome::Advanced,
        };
        let slide = SlideEvent {
            at: HostTime(5_000),
            raw: -4,
            shown: Shown::Single(2),
        };
        rec.on_timer(&timer);
        rec.on_tick(&tick);
        rec.on_slide(&slide);

        let events: Vec<_> = rec.events().collect();
        assert_eq!(
            events,
            [
                RecordedEvent::Timer(timer),
                RecordedEvent::Tick(tick),
                RecordedEvent::Slide(slide),
            ]
        );
    }

    #[test]
    fn mode_width_survives_encoding() {
        let mut rec = RecorderSink::new();
        rec.on_mode(&ModeEvent {
            at: HostTime(12),
            mode: ViewportMode::Narrow,
            width: 499.5,
        });
        match decode(rec.as_bytes()).next() {
            Some(RecordedEvent::Mode(e)) => {
                assert_eq!(e.mode, ViewportMode::Narrow);
                assert_eq!(e.width, 499.5);
                assert_eq!(e.at, HostTime(12));
            }
            other => panic!("expected Mode, got {other:?}"),
        }
    }

    #[test]
    fn show_all_and_listener_events() {
        let mut rec = RecorderSink::new();
        rec.on_listener(&ListenerEvent {
            at: HostTime(0),
            listener: Listener::VisibilityChange,
            attached: false,
        });
        rec.on_slide(&SlideEvent {
            at: HostTime(0),
            raw: 7,
            shown: Shown::All,
        });
        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert!(matches!(
            events[0],
            RecordedEvent::Listener(ListenerEvent {
                listener: Listener::VisibilityChange,
                attached: false,
                ..
            })
        ));
        assert!(matches!(
            events[1],
            RecordedEvent::Slide(SlideEvent {
                raw: 7,
                shown: Shown::All,
                ..
            })
        ));
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }

    #[test]
    fn truncated_record_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_pause(&PauseEvent {
            at: HostTime(1),
            paused: true,
        });
        rec.on_pause(&PauseEvent {
            at: HostTime(2),
            paused: false,
        });
        let bytes = rec.into_bytes();
        let events: Vec<_> = decode(&bytes[..bytes.len() - 1]).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].at(), HostTime(1));
    }
}
