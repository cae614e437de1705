// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: announcement bars driven by `herald_backend_web`.
//!
//! Mounts a bar on every `announcement-bar-component` element in the page.
//! A bar whose root carries a `trace` attribute logs its state changes to the
//! browser console.
//!
//! Build with: `wasm-pack build --target web demos/web_bar`
//!
//! Then serve `demos/web_bar/` and open `index.html` in a browser. Narrow the
//! window below 500px to switch from the static layout to rotation.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::format;

use wasm_bindgen::prelude::*;

use herald_backend_web::{ConsoleSink, mount_all};

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let bars = mount_all(|i, root| {
        root.has_attribute("trace").then(|| ConsoleSink::new(format!("bar {i}")))
    })?;

    // The bars live for the lifetime of the page.
    core::mem::forget(bars);

    Ok(())
}
