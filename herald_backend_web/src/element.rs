// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mounting a bar on an existing DOM subtree.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{RefCell, RefMut};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::Element;

use herald_core::bar::AnnouncementBar;
use herald_core::config::{AutoplayConfig, BarConfig};
use herald_core::trace::{NoopSink, TraceSink};

use crate::host::{Dispatch, DomEvent, DomHost, callback};

/// Tag name of the custom element this backend drives.
pub const TAG_NAME: &str = "announcement-bar-component";

/// Attribute holding the autoplay interval in seconds.
pub const AUTOPLAY_ATTRIBUTE: &str = "autoplay";

const SLIDES_SELECTOR: &str = r#"[ref="slides[]"]"#;
const PREVIOUS_SELECTOR: &str = r#"[ref="previous"]"#;
const NEXT_SELECTOR: &str = r#"[ref="next"]"#;

type Shared<S> = Rc<RefCell<AnnouncementBar<DomHost, S>>>;

/// A running announcement bar bound to a root element.
///
/// Mounting reads the configuration from the root's attributes, collects the
/// slides, wires the previous/next triggers, and starts the bar. Dropping
/// the element stops the bar and releases every browser listener and timer
/// it holds.
///
/// The root is expected to look like:
///
/// ```html
/// <announcement-bar-component autoplay="5">
///   <button ref="previous">‹</button>
///   <p ref="slides[]">Free shipping over $50</p>
///   <p ref="slides[]">New arrivals every Friday</p>
///   <button ref="next">›</button>
/// </announcement-bar-component>
/// ```
pub struct AnnouncementBarElement<S: TraceSink + 'static = NoopSink> {
    bar: Shared<S>,
    triggers: Vec<(Element, Closure<dyn FnMut()>)>,
}

impl AnnouncementBarElement {
    /// Mounts a bar on `root` without tracing.
    pub fn mount(root: Element) -> Result<Self, JsValue> {
        Self::mount_with_sink(root, NoopSink)
    }
}

impl<S: TraceSink + 'static> AnnouncementBarElement<S> {
    /// Mounts a bar on `root` that reports to `sink`.
    pub fn mount_with_sink(root: Element, sink: S) -> Result<Self, JsValue> {
        let autoplay =
            AutoplayConfig::from_attribute(root.get_attribute(AUTOPLAY_ATTRIBUTE).as_deref());
        Self::mount_with_config(root, BarConfig::new(autoplay), sink)
    }

    /// Mounts a bar on `root` with an explicit configuration.
    ///
    /// The `autoplay` attribute is ignored.
    pub fn mount_with_config(root: Element, config: BarConfig, sink: S) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;

        let mut query = String::new();
        config
            .viewport
            .write_media_query(&mut query)
            .map_err(|_| JsValue::from_str("failed to format media query"))?;
        let media = window
            .match_media(&query)?
            .ok_or_else(|| JsValue::from_str("matchMedia is unavailable"))?;

        let slides = query_all(&root, SLIDES_SELECTOR)?;
        let previous = root.query_selector(PREVIOUS_SELECTOR)?;
        let next = root.query_selector(NEXT_SELECTOR)?;

        let bar: Shared<S> = Rc::new_cyclic(|weak| {
            let target: Weak<dyn Dispatch> = weak.clone();
            let host = DomHost::new(window, document, root, media, slides, target);
            RefCell::new(AnnouncementBar::with_sink(host, config, sink))
        });

        let mut element = Self {
            bar,
            triggers: Vec::new(),
        };
        if let Some(previous) = previous {
            element.wire_trigger(previous, DomEvent::Previous)?;
        }
        if let Some(next) = next {
            element.wire_trigger(next, DomEvent::Next)?;
        }
        element.bar.borrow_mut().start();
        Ok(element)
    }

    fn wire_trigger(&mut self, trigger: Element, event: DomEvent) -> Result<(), JsValue> {
        let target: Weak<dyn Dispatch> = Rc::downgrade(&self.bar);
        let closure = callback(target, event);
        trigger.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        self.triggers.push((trigger, closure));
        Ok(())
    }

    /// Borrows the bar for programmatic control (`play`, `pause`, `next`, …).
    ///
    /// # Panics
    ///
    /// Panics if the bar is already borrowed, e.g. from its own trace sink.
    pub fn bar(&self) -> RefMut<'_, AnnouncementBar<DomHost, S>> {
        self.bar.borrow_mut()
    }
}

impl<S: TraceSink + 'static> Drop for AnnouncementBarElement<S> {
    fn drop(&mut self) {
        if let Ok(mut bar) = self.bar.try_borrow_mut() {
            bar.stop();
        }
        for (trigger, closure) in &self.triggers {
            let _ = trigger
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

impl<S: TraceSink + 'static> core::fmt::Debug for AnnouncementBarElement<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnnouncementBarElement")
            .field("triggers", &self.triggers.len())
            .finish_non_exhaustive()
    }
}

/// Collects every element under `root` matching `selector`.
fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Mounts a bar on every [`TAG_NAME`] element in the current document.
///
/// `sink_for` receives each root's position in document order and the root
/// itself, and returns the trace sink for that bar. Pass `|_, _| NoopSink`
/// for no tracing; return an `Option` to trace only some bars.
pub fn mount_all<S, F>(mut sink_for: F) -> Result<Vec<AnnouncementBarElement<S>>, JsValue>
where
    S: TraceSink + 'static,
    F: FnMut(u32, &Element) -> S,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let mut mounted = Vec::new();
    let roots = document.query_selector_all(TAG_NAME)?;
    for i in 0..roots.length() {
        if let Some(root) = roots.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            let sink = sink_for(i, &root);
            mounted.push(AnnouncementBarElement::mount_with_sink(root, sink)?);
        }
    }
    Ok(mounted)
}
