// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM implementation of the herald host capabilities.
//!
//! [`DomHost`] maps each capability onto a browser API:
//!
//! | Capability           | Browser API                                        |
//! |----------------------|----------------------------------------------------|
//! | `Clock`              | `performance.now()`                                |
//! | `TimerHost`          | `setInterval` / `clearInterval`                    |
//! | `SlideView`          | `aria-hidden` on each slide, `paused` on the root  |
//! | `ForegroundProvider` | `document.hidden`                                  |
//! | `HoverProvider`      | `root.matches(":hover")`                           |
//! | `ViewportObserver`   | the width media query's `matches`, plus `innerWidth` / `innerHeight` for traces |
//! | `ListenerHost`       | `mouseenter`, `mouseleave`, `visibilitychange`, and the media query's `change` |
//!
//! Every JS callback holds only a weak reference back to the bar, so a bar
//! that has been dropped ignores late events instead of keeping itself alive.

use alloc::boxed::Box;
use alloc::rc::Weak;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::time::Duration;

use kurbo::Size;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, EventTarget, MediaQueryList, Window};

use herald_core::bar::AnnouncementBar;
use herald_core::config::WidthPredicate;
use herald_core::gate::ViewportMode;
use herald_core::host::{
    Clock, ForegroundProvider, HoverProvider, Listener, ListenerHost, SlideView, TimerHost,
    TimerId, ViewportObserver,
};
use herald_core::time::HostTime;
use herald_core::trace::TraceSink;

use crate::timer::Interval;

/// An event delivered from a JS callback to the bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DomEvent {
    Tick(TimerId),
    Listener(Listener),
    Previous,
    Next,
}

/// Receiver of [`DomEvent`]s, implemented by the bar's shared cell.
pub(crate) trait Dispatch {
    fn dispatch(&self, event: DomEvent);
}

impl<S: TraceSink> Dispatch for RefCell<AnnouncementBar<DomHost, S>> {
    fn dispatch(&self, event: DomEvent) {
        // A callback that fires while the bar is already borrowed is dropped.
        let Ok(mut bar) = self.try_borrow_mut() else {
            return;
        };
        match event {
            DomEvent::Tick(id) => bar.on_tick(id),
            DomEvent::Listener(Listener::PointerEnter) => bar.on_pointer_enter(),
            DomEvent::Listener(Listener::PointerLeave) => bar.on_pointer_leave(),
            DomEvent::Listener(Listener::VisibilityChange) => bar.on_visibility_change(),
            DomEvent::Listener(Listener::ViewportChange) => bar.on_viewport_change(),
            DomEvent::Previous => bar.previous(),
            DomEvent::Next => bar.next(),
        }
    }
}

/// Returns a callback that forwards `event` to `target` while it is alive.
fn forward(target: Weak<dyn Dispatch>, event: DomEvent) -> impl FnMut() + 'static {
    move || {
        if let Some(target) = target.upgrade() {
            target.dispatch(event);
        }
    }
}

/// Wraps [`forward`] in a JS closure.
pub(crate) fn callback(target: Weak<dyn Dispatch>, event: DomEvent) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(forward(target, event)) as Box<dyn FnMut()>)
}

fn event_name(listener: Listener) -> &'static str {
    match listener {
        Listener::PointerEnter => "mouseenter",
        Listener::PointerLeave => "mouseleave",
        Listener::VisibilityChange => "visibilitychange",
        Listener::ViewportChange => "change",
    }
}

/// Browser-backed host for one announcement bar element.
pub struct DomHost {
    window: Window,
    document: Document,
    root: Element,
    media: MediaQueryList,
    slides: Vec<Element>,
    target: Weak<dyn Dispatch>,
    next_timer: u32,
    timers: Vec<(TimerId, Interval)>,
    listeners: Vec<(Listener, Closure<dyn FnMut()>)>,
}

impl DomHost {
    pub(crate) fn new(
        window: Window,
        document: Document,
        root: Element,
        media: MediaQueryList,
        slides: Vec<Element>,
        target: Weak<dyn Dispatch>,
    ) -> Self {
        Self {
            window,
            document,
            root,
            media,
            slides,
            target,
            next_timer: 0,
            timers: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Number of browser event listeners currently registered for the bar.
    ///
    /// Previous/next click triggers are owned by the element and not counted.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of live `setInterval` timers.
    #[must_use]
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    fn event_target(&self, listener: Listener) -> &EventTarget {
        match listener {
            Listener::PointerEnter | Listener::PointerLeave => self.root.as_ref(),
            Listener::VisibilityChange => self.document.as_ref(),
            Listener::ViewportChange => self.media.as_ref(),
        }
    }

    fn unregister(&self, listener: Listener, closure: &Closure<dyn FnMut()>) {
        let _ = self
            .event_target(listener)
            .remove_event_listener_with_callback(
                event_name(listener),
                closure.as_ref().unchecked_ref(),
            );
    }
}

impl Clock for DomHost {
    fn now(&self) -> HostTime {
        crate::now()
    }
}

impl TimerHost for DomHost {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        self.next_timer = self.next_timer.wrapping_add(1);
        let id = TimerId(self.next_timer);
        let interval = Interval::start(period, forward(self.target.clone(), DomEvent::Tick(id)));
        self.timers.push((id, interval));
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        // Dropping the interval clears it.
        self.timers.retain(|(t, _)| *t != id);
    }
}

impl SlideView for DomHost {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_slide_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(slide) = self.slides.get(index) {
            let _ = slide.set_attribute("aria-hidden", if hidden { "true" } else { "false" });
        }
    }

    fn set_paused_marker(&mut self, paused: bool) {
        let _ = self.root.toggle_attribute_with_force("paused", paused);
    }
}

impl ForegroundProvider for DomHost {
    fn is_foreground(&self) -> bool {
        !self.document.hidden()
    }
}

impl HoverProvider for DomHost {
    fn is_hovered(&self) -> bool {
        self.root.matches(":hover").unwrap_or(false)
    }
}

impl ViewportObserver for DomHost {
    fn viewport_size(&self) -> Size {
        let dimension =
            |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Size::new(
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }

    // The media query is built from the same predicate. `innerWidth` is whole
    // pixels and can disagree with it on zoomed pages.
    fn viewport_mode(&self, _predicate: &WidthPredicate) -> ViewportMode {
        if self.media.matches() {
            ViewportMode::Wide
        } else {
            ViewportMode::Narrow
        }
    }
}

impl ListenerHost for DomHost {
    fn add_listener(&mut self, listener: Listener) {
        let closure = callback(self.target.clone(), DomEvent::Listener(listener));
        let _ = self
            .event_target(listener)
            .add_event_listener_with_callback(
                event_name(listener),
                closure.as_ref().unchecked_ref(),
            );
        self.listeners.push((listener, closure));
    }

    fn remove_listener(&mut self, listener: Listener) {
        if let Some(pos) = self.listeners.iter().position(|(l, _)| *l == listener) {
            let (listener, closure) = self.listeners.swap_remove(pos);
            self.unregister(listener, &closure);
        }
    }
}

impl Drop for DomHost {
    fn drop(&mut self) {
        // Closures must leave their event targets before they are freed.
        for (listener, closure) in core::mem::take(&mut self.listeners) {
            self.unregister(listener, &closure);
        }
    }
}

impl core::fmt::Debug for DomHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomHost")
            .field("slides", &self.slides.len())
            .field("timers", &self.timers.len())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
