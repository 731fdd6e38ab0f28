//! Navigation menu toggle.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use web_sys::{Document, Element};

use crate::config::{ACTIVE_CLASS, MENU_TOGGLE_ID, NAV_LINK_SELECTOR, NAV_LIST_ID};
use crate::dom;
use crate::state::menu::MenuState;

pub fn init_menu(doc: &Document) {
    let (Some(toggle), Some(list)) = (
        dom::by_id::<Element>(doc, MENU_TOGGLE_ID),
        dom::by_id::<Element>(doc, NAV_LIST_ID),
    ) else {
        debug!("[MENU] #{} or #{} missing, skipping", MENU_TOGGLE_ID, NAV_LIST_ID);
        return;
    };

    let menu = Rc::new(Cell::new(MenuState::default()));

    {
        let (doc, toggle_el, list, menu) = (doc.clone(), toggle.clone(), list.clone(), menu.clone());
        dom::listen(&toggle, "click", move |_| {
            let next = menu.get().toggle();
            menu.set(next);
            render(&doc, &toggle_el, &list, next);
        });
    }

    let links = dom::query_all(doc, NAV_LINK_SELECTOR);
    for link in &links {
        let (doc, toggle, list, menu) = (doc.clone(), toggle.clone(), list.clone(), menu.clone());
        dom::listen(link, "click", move |_| {
            let next = menu.get().close();
            menu.set(next);
            render(&doc, &toggle, &list, next);
        });
    }
    debug!("[MENU] Wired toggle and {} links", links.len());
}

fn render(doc: &Document, toggle: &Element, list: &Element, menu: MenuState) {
    let _ = list.class_list().toggle_with_force(ACTIVE_CLASS, menu.open);
    dom::set_icon(doc, toggle, menu.icon_class());
}
