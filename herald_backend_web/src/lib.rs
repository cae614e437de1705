// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for herald.
//!
//! This crate binds the `herald_core` state machine to the browser:
//!
//! - [`AnnouncementBarElement`]: mounts a bar on an existing DOM subtree and
//!   keeps it running until dropped
//! - [`DomHost`]: the host capabilities (`setInterval` timers, `matchMedia`
//!   mode switches, `aria-hidden` slide markers, hover and page visibility)
//! - [`ConsoleSink`]: trace output through `console.debug`
//!
//! All browser callbacks are synchronous and run on the page's single
//! thread, so the bar lives in an `Rc<RefCell<_>>` shared with them.

#![no_std]

extern crate alloc;

mod console;
mod element;
mod host;
mod timer;

pub use console::ConsoleSink;
pub use element::{AUTOPLAY_ATTRIBUTE, AnnouncementBarElement, TAG_NAME, mount_all};
pub use host::DomHost;

use herald_core::time::HostTime;

/// Returns the current host time from `performance.now()`, in milliseconds.
#[must_use]
pub fn now() -> HostTime {
    let ms = timer::performance_now();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns a small positive f64 of milliseconds"
    )]
    let ms = ms as u64;
    HostTime(ms)
}
