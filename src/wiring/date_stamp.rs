use log::debug;
use web_sys::Document;

use crate::config::CURRENT_DATE_ID;
use crate::state::date_stamp::{format_ru_date, today};

pub fn set_current_date(doc: &Document) {
    match doc.get_element_by_id(CURRENT_DATE_ID) {
        Some(el) => el.set_text_content(Some(&format_ru_date(today()))),
        None => debug!("[DATE] #{} missing, skipping", CURRENT_DATE_ID),
    }
}
