//! DOM Helpers
//!
//! Lookups and listener plumbing shared by the static-page wiring.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Element by id, cast to the expected type
pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach a listener for the rest of the page lifetime
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Replace `host`'s content with a single `<i class=...>` glyph
pub fn set_icon(doc: &Document, host: &Element, class: &str) {
    host.set_text_content(None);
    if let Ok(icon) = doc.create_element("i") {
        icon.set_class_name(class);
        let _ = host.append_child(&icon);
    }
}
