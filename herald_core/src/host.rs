// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capability contract.
//!
//! The bar never touches a window, a document, or a timer API directly.
//! Everything it needs from its environment is expressed as one of the
//! capability traits below, and a backend provides all of them:
//!
//! - **Clock** — [`Clock::now`] for trace timestamps.
//!
//! - **Timers** — [`TimerHost`] schedules and clears recurring intervals. The
//!   host delivers each firing back with
//!   [`AnnouncementBar::on_tick`](crate::bar::AnnouncementBar::on_tick).
//!
//! - **Slides** — [`SlideView`] exposes the slide count, the per-slide hidden
//!   marker, and the bar's observable `paused` marker.
//!
//! - **Signals** — [`ForegroundProvider`], [`HoverProvider`], and
//!   [`ViewportObserver`] are sampled whenever the bar needs a fresh reading.
//!   They are never cached.
//!
//! - **Listeners** — [`ListenerHost`] registers and deregisters the event
//!   sources that call the bar's `on_*` entry points.
//!
//! [`Host`] bundles them and is implemented automatically.
//!
//! # Event loop pseudocode
//!
//! ```rust,ignore
//! let bar = AnnouncementBar::new(host, config);
//! bar.start();
//!
//! loop {
//!     match next_event() {
//!         Event::Interval(id) => bar.on_tick(id),
//!         Event::MouseEnter => bar.on_pointer_enter(),
//!         Event::MouseLeave => bar.on_pointer_leave(),
//!         Event::VisibilityChange => bar.on_visibility_change(),
//!         Event::MediaChange => bar.on_viewport_change(),
//!         Event::Disconnected => break,
//!     }
//! }
//!
//! bar.stop();
//! ```

use core::fmt;
use core::time::Duration;

use kurbo::Size;

use crate::config::WidthPredicate;
use crate::gate::ViewportMode;
use crate::time::HostTime;

/// Host-assigned handle for a scheduled interval.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u32);

impl fmt::Debug for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimerId({})", self.0)
    }
}

/// An event source the bar can ask its host to observe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Pointer enters the bar; routed to `on_pointer_enter`.
    PointerEnter,
    /// Pointer leaves the bar; routed to `on_pointer_leave`.
    PointerLeave,
    /// Host page visibility changes; routed to `on_visibility_change`.
    VisibilityChange,
    /// The viewport width predicate may have flipped; routed to
    /// `on_viewport_change`.
    ViewportChange,
}

impl Listener {
    /// Every listener kind, in a fixed order.
    pub const ALL: [Self; 4] = [
        Self::PointerEnter,
        Self::PointerLeave,
        Self::VisibilityChange,
        Self::ViewportChange,
    ];

    /// The listeners attached while the bar is interactive.
    pub const INTERACTION: [Self; 3] = [
        Self::PointerEnter,
        Self::PointerLeave,
        Self::VisibilityChange,
    ];
}

/// Monotonic time source.
pub trait Clock {
    /// Returns the current host time.
    fn now(&self) -> HostTime;
}

/// Recurring timer scheduling.
pub trait TimerHost {
    /// Schedules a recurring interval and returns its handle.
    ///
    /// The first firing happens one full `period` after this call.
    fn set_interval(&mut self, period: Duration) -> TimerId;

    /// Cancels a previously scheduled interval. Unknown ids are ignored.
    fn clear_interval(&mut self, id: TimerId);
}

/// Access to the slide handles and the bar's observable markers.
pub trait SlideView {
    /// Number of slides. Fixed for the lifetime of the bar.
    fn slide_count(&self) -> usize;

    /// Sets the hidden marker of the slide at `index` (`index < slide_count()`).
    fn set_slide_hidden(&mut self, index: usize, hidden: bool);

    /// Reflects the explicit pause flag (the `paused` attribute).
    fn set_paused_marker(&mut self, paused: bool);
}

/// Page visibility signal.
pub trait ForegroundProvider {
    /// Returns `true` while the host page is visible.
    fn is_foreground(&self) -> bool;
}

/// Pointer hover signal.
pub trait HoverProvider {
    /// Returns `true` while the pointer is over the bar.
    fn is_hovered(&self) -> bool;
}

/// Viewport dimensions.
pub trait ViewportObserver {
    /// Returns the current viewport size in layout units.
    fn viewport_size(&self) -> Size;

    /// Returns the layout mode the viewport calls for under `predicate`.
    ///
    /// Defaults to classifying [`viewport_size`](Self::viewport_size). Hosts
    /// that are notified by a platform query (such as a CSS media query built
    /// from the same predicate) override this to report that query's own
    /// answer, so the mode always agrees with the notification.
    fn viewport_mode(&self, predicate: &WidthPredicate) -> ViewportMode {
        predicate.classify(self.viewport_size())
    }
}

/// Event-source registration.
///
/// The bar pairs every [`add_listener`](Self::add_listener) with exactly one
/// [`remove_listener`](Self::remove_listener) and never adds the same
/// listener twice, so hosts may forward these calls straight to
/// `addEventListener`/`removeEventListener`.
pub trait ListenerHost {
    /// Starts delivering events for `listener`.
    fn add_listener(&mut self, listener: Listener);

    /// Stops delivering events for `listener`.
    fn remove_listener(&mut self, listener: Listener);
}

/// Everything an [`AnnouncementBar`](crate::bar::AnnouncementBar) needs from
/// its environment.
pub trait Host:
    Clock + TimerHost + SlideView + ForegroundProvider + HoverProvider + ViewportObserver + ListenerHost
{
}

impl<T> Host for T where
    T: Clock
        + TimerHost
        + SlideView
        + ForegroundProvider
        + HoverProvider
        + ViewportObserver
        + ListenerHost
{
}
