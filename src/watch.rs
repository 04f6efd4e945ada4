//! Viewport Sentinel Watcher
//!
//! Scoped wrapper over `IntersectionObserver`. One watcher owns one
//! observer bound to one node; dropping the watcher disconnects the
//! observer, so rebinding to a new last row is drop-then-observe and a
//! mounted list never holds two live observers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

pub struct SentinelWatcher {
    observer: IntersectionObserver,
    // Held so the JS callback stays valid for the observer's lifetime.
    _on_intersect: Closure<dyn FnMut(js_sys::Array)>,
}

impl SentinelWatcher {
    /// Observe `node`, running `on_visible` whenever it enters the
    /// viewport. Returns `None` if the observer cannot be constructed;
    /// callers treat that as "no sentinel" and move on.
    pub fn observe(node: &Element, on_visible: impl Fn() + 'static) -> Option<Self> {
        let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let visible = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if visible {
                on_visible();
            }
        });
        let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()).ok()?;
        observer.observe(node);
        Some(Self {
            observer,
            _on_intersect: on_intersect,
        })
    }
}

impl Drop for SentinelWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
