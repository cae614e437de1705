// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use alloc::format;
use alloc::string::String;

use wasm_bindgen::JsValue;

use herald_core::trace::{
    LifecycleEvent, ListenerEvent, ModeEvent, PauseEvent, Shown, SlideEvent, TickEvent,
    TimerEvent, TraceSink,
};

/// A [`TraceSink`] that writes one `console.debug` line per event.
///
/// Lines carry a configurable prefix so several bars on one page can be told
/// apart.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    prefix: String,
}

impl ConsoleSink {
    /// Creates a sink whose lines start with `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn emit(&self, line: &str) {
        web_sys::console::debug_1(&JsValue::from_str(&format!("[{}] {line}", self.prefix)));
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new("herald")
    }
}

impl TraceSink for ConsoleSink {
    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        self.emit(&format!("{:?} at {:?}", e.phase, e.at));
    }

    fn on_mode(&mut self, e: &ModeEvent) {
        self.emit(&format!("mode {:?} (width {})", e.mode, e.width));
    }

    fn on_listener(&mut self, e: &ListenerEvent) {
        let verb = if e.attached { "attach" } else { "detach" };
        self.emit(&format!("{verb} {:?}", e.listener));
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        self.emit(&format!(
            "timer {:?} {:?} every {}ms",
            e.id,
            e.action,
            e.period.as_millis()
        ));
    }

    fn on_tick(&mut self, e: &TickEvent) {
        self.emit(&format!("tick {:?} {:?}", e.id, e.outcome));
    }

    fn on_slide(&mut self, e: &SlideEvent) {
        match e.shown {
            Shown::Single(index) => self.emit(&format!("slide {index} (current {})", e.raw)),
            Shown::All => self.emit("all slides shown"),
        }
    }

    fn on_pause(&mut self, e: &PauseEvent) {
        self.emit(if e.paused { "paused" } else { "unpaused" });
    }
}
