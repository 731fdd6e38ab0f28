//! Page Initialization
//!
//! Wires the static markup and mounts each component into its root.
//! Every module is independent; a missing target only skips that module.

use leptos::prelude::*;
use log::{debug, info};
use web_sys::{Document, HtmlElement};

use crate::components::{FeedbackForm, ProjectGallery, RecordsTable, StatsCounter};
use crate::config::{FEEDBACK_ROOT_ID, GALLERY_ROOT_ID, STATS_ROOT_ID, TABLE_ROOT_ID};
use crate::dom;
use crate::wiring;

fn mount_section<F, N>(doc: &Document, root_id: &str, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let Some(root) = dom::by_id::<HtmlElement>(doc, root_id) else {
        debug!("[APP] #{} missing, skipping", root_id);
        return;
    };
    leptos::mount::mount_to(root, view).forget();
    debug!("[APP] Mounted #{}", root_id);
}

pub fn init_page() {
    let Some(doc) = dom::document() else {
        return;
    };

    wiring::menu::init_menu(&doc);
    wiring::theme::init_theme_toggle(&doc);
    wiring::skills::init_skill_bars(&doc);
    mount_section(&doc, GALLERY_ROOT_ID, ProjectGallery);
    mount_section(&doc, TABLE_ROOT_ID, RecordsTable);
    mount_section(&doc, FEEDBACK_ROOT_ID, FeedbackForm);
    mount_section(&doc, STATS_ROOT_ID, StatsCounter);
    wiring::date_stamp::set_current_date(&doc);

    info!("[APP] Page ready");
}
