//! Light/dark theme toggle.

use log::{debug, warn};
use web_sys::{Document, HtmlInputElement};

use crate::config::{DARK_MODE_CLASS, THEME_TOGGLE_ID};
use crate::dom;
use crate::models::Theme;
use crate::state::theme::{from_checked, resolve_theme};
use crate::storage::{save_theme, stored_theme, LocalStore};

fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

fn apply_theme(doc: &Document, toggle: &HtmlInputElement, theme: Theme) {
    if let Some(body) = doc.body() {
        let _ = body.class_list().toggle_with_force(DARK_MODE_CLASS, theme.is_dark());
    }
    toggle.set_checked(theme.is_dark());
}

pub fn init_theme_toggle(doc: &Document) {
    let Some(toggle) = dom::by_id::<HtmlInputElement>(doc, THEME_TOGGLE_ID) else {
        debug!("[THEME] #{} missing, skipping", THEME_TOGGLE_ID);
        return;
    };

    let stored = match LocalStore::open().and_then(|store| stored_theme(&store)) {
        Ok(value) => value,
        Err(e) => {
            warn!("[THEME] {}", e);
            None
        }
    };
    let theme = resolve_theme(stored.as_deref(), prefers_dark_scheme());
    apply_theme(doc, &toggle, theme);
    debug!("[THEME] Initial theme {}", theme.as_str());

    let (doc, input) = (doc.clone(), toggle.clone());
    dom::listen(&toggle, "change", move |_| {
        let theme = from_checked(input.checked());
        apply_theme(&doc, &input, theme);
        if let Err(e) = LocalStore::open().and_then(|store| save_theme(&store, theme)) {
            warn!("[THEME] Could not persist {}: {}", theme.as_str(), e);
        }
    });
}
