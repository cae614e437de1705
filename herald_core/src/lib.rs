// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playback state machine for rotating announcement bars.
//!
//! `herald_core` owns the logic that decides which slide of an announcement
//! bar is visible, when the autoplay timer runs, and when the whole slideshow
//! is switched off in favor of a static layout. It is `no_std` compatible
//! (with `alloc`) and talks to the outside world only through small
//! capability traits, so the same state machine runs against the browser DOM
//! and against a simulated host in tests.
//!
//! # Architecture
//!
//! The host owns the event loop and forwards every signal into the bar:
//!
//! ```text
//!   Host (timers, listeners, signals)
//!       │
//!       ▼
//!   start() / on_viewport_change() ──► mode gate ──► enable / disable
//!                                                        │
//!                 ┌──────────────────────────────────────┘
//!                 ▼
//!   listener wiring ──► on_pointer_*() / on_visibility_change()
//!                                │
//!                                ▼
//!   autoplay ──► on_tick() ──► slide tracker ──► SlideView::set_slide_hidden()
//! ```
//!
//! **[`slides`]** — Unbounded signed slide counter with wraparound display
//! index derivation.
//!
//! **[`autoplay`]** — Playback state: explicit pause flag and the single
//! recurring timer handle, with clear-before-set discipline.
//!
//! **[`wiring`]** — Tracks which host listeners are attached so attach and
//! detach stay exactly paired.
//!
//! **[`gate`]** — Viewport mode classification and transition detection.
//!
//! **[`bar`]** — [`AnnouncementBar`](bar::AnnouncementBar), the state machine
//! that orchestrates the four facets above.
//!
//! **[`host`]** — Capability traits that backends implement.
//!
//! **[`config`]** — Typed configuration resolved once at construction.
//!
//! **[`time`]** — Millisecond host timestamps.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! playback instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod autoplay;
pub mod bar;
pub mod config;
pub mod gate;
pub mod host;
pub mod slides;
pub mod time;
pub mod trace;
pub mod wiring;
