//! Scroll-reveal animation.
//!
//! Elements carrying the `reveal` class fade in the first time they enter
//! the viewport. Browser-only; SSR paths no-op so server rendering stays
//! deterministic.

/// Class marking an element as a reveal target.
pub const REVEAL_CLASS: &str = "reveal";
/// Class added once the element has entered the viewport.
pub const REVEAL_VISIBLE_CLASS: &str = "reveal--visible";

/// Observe every `.reveal` element in the document and mark it visible
/// when it intersects the viewport. Call after a page renders.
pub fn observe_reveals() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                        if entry.is_intersecting() {
                            let _ = entry.target().class_list().add_1(REVEAL_VISIBLE_CLASS);
                        }
                    }
                }
            },
        );

        let Ok(observer) = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
            return;
        };
        callback.forget();

        let Ok(nodes) = document.query_selector_all(&format!(".{REVEAL_CLASS}")) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                    observer.observe(&element);
                }
            }
        }
    }
}
