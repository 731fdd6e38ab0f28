//! Skill bars fill once when scrolled into view.

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{SKILL_LEVEL_ATTR, SKILL_SELECTOR, SKILL_THRESHOLD};
use crate::dom;
use crate::state::skills::skill_width;

/// Set the bar's width from its `data-level`. Returns whether it changed.
pub fn fill_skill_bar(el: &Element) -> bool {
    let Some(width) = skill_width(el.get_attribute(SKILL_LEVEL_ATTR).as_deref()) else {
        return false;
    };
    match el.dyn_ref::<HtmlElement>() {
        Some(bar) => bar.style().set_property("width", &width).is_ok(),
        None => false,
    }
}

pub fn init_skill_bars(doc: &Document) {
    let bars = dom::query_all(doc, SKILL_SELECTOR);
    if bars.is_empty() {
        debug!("[SKILLS] No {} elements, skipping", SKILL_SELECTOR);
        return;
    }
    match leptos_viewport::observe_once(&bars, SKILL_THRESHOLD, |el| {
        fill_skill_bar(el);
    }) {
        Ok(subscription) => {
            debug!("[SKILLS] Observing {} bars", bars.len());
            subscription.leak();
        }
        Err(e) => warn!("[SKILLS] IntersectionObserver unavailable: {:?}", e),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn bar(level: &str) -> Element {
        let doc = dom::document().unwrap();
        let el = doc.create_element("div").unwrap();
        el.set_attribute(SKILL_LEVEL_ATTR, level).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn fills_width_from_level() {
        let el = bar("70");
        assert!(fill_skill_bar(&el));
        let style = el.dyn_ref::<HtmlElement>().unwrap().style();
        assert_eq!(style.get_property_value("width").unwrap(), "70%");
    }

    #[wasm_bindgen_test]
    fn ignores_bad_level() {
        assert!(!fill_skill_bar(&bar("lots")));
    }
}
