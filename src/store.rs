//! Stats Store
//!
//! Uses Leptos reactive_stores for field-level reactivity of the counters.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::{COMPLETED_PROJECTS, EXPERIENCE_YEARS};
use crate::state::stats::{ToastQueue, TOAST_TEXT};

/// Displayed counter text plus the toasts on screen
#[derive(Clone, Debug, Default, Store)]
pub struct StatsBoard {
    pub completed_projects: String,
    pub experience_years: String,
    pub toasts: ToastQueue,
}

impl StatsBoard {
    pub fn new() -> Self {
        Self {
            completed_projects: COMPLETED_PROJECTS.initial_display(),
            experience_years: EXPERIENCE_YEARS.initial_display(),
            toasts: ToastQueue::default(),
        }
    }
}

pub type StatsStore = Store<StatsBoard>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_completed(store: &StatsStore, text: String) {
    *store.completed_projects().write() = text;
}

pub fn store_set_experience(store: &StatsStore, text: String) {
    *store.experience_years().write() = text;
}

/// Queue the "stats updated" toast, returning its id
pub fn store_push_toast(store: &StatsStore) -> u32 {
    store.toasts().write().push(TOAST_TEXT)
}

pub fn store_remove_toast(store: &StatsStore, id: u32) {
    store.toasts().write().remove(id);
}
