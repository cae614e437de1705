// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` timers and the `performance.now()` clock.
//!
//! [`Interval`] owns both the browser interval handle and the JS closure it
//! calls, so dropping it cancels the interval before the closure is freed.

use alloc::boxed::Box;
use core::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use herald_core::time::duration_to_millis;

// Direct global bindings instead of `web_sys::Window` methods, so timers can
// be scheduled without fetching (and unwrapping) the Window first.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(handle: i32);
}

/// Converts a period to a `setInterval` delay: whole milliseconds, at least
/// 1, at most `i32::MAX`.
pub(crate) fn interval_ms(period: Duration) -> i32 {
    i32::try_from(duration_to_millis(period))
        .unwrap_or(i32::MAX)
        .max(1)
}

/// A live `setInterval` registration.
pub(crate) struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Calls `callback` every `period` until dropped.
    pub(crate) fn start(period: Duration, callback: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let handle = set_interval(closure.as_ref(), interval_ms(period));
        Self {
            handle,
            _closure: closure,
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        clear_interval(self.handle);
    }
}

impl core::fmt::Debug for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interval")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_ms_clamps() {
        assert_eq!(interval_ms(Duration::from_secs(5)), 5_000);
        assert_eq!(interval_ms(Duration::from_micros(10)), 1);
        assert_eq!(interval_ms(Duration::from_secs(u64::MAX)), i32::MAX);
    }
}
