//! Page Configuration
//!
//! Compile-time constants: storage keys, timings, and the DOM contract.

use crate::state::stats::CounterSpec;

// ========================
// Storage Keys
// ========================

pub const THEME_KEY: &str = "theme";
pub const FEEDBACKS_KEY: &str = "feedbacks";

// ========================
// Timings (ms)
// ========================

/// How long a form message stays fully visible
pub const MESSAGE_VISIBLE_MS: u32 = 5000;
/// Fade-out before the message reverts to neutral
pub const MESSAGE_FADE_MS: u32 = 300;
pub const TOAST_MS: u32 = 3000;
pub const STATS_ANIMATION_MS: f64 = 1000.0;

/// Visible fraction that triggers a skill bar
pub const SKILL_THRESHOLD: f64 = 0.5;

// ========================
// Stats
// ========================

pub const COMPLETED_PROJECTS: CounterSpec = CounterSpec { start: 8, end: 12 };
pub const EXPERIENCE_YEARS: CounterSpec = CounterSpec { start: 3, end: 4 };
pub const HAPPY_CLIENTS: &str = "10+";

// ========================
// DOM Contract
// ========================

pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const NAV_LIST_ID: &str = "navList";
pub const NAV_LINK_SELECTOR: &str = ".nav-list a";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const SKILL_SELECTOR: &str = ".skill-level";
pub const SKILL_LEVEL_ATTR: &str = "data-level";
pub const CURRENT_DATE_ID: &str = "currentDate";

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const ACTIVE_CLASS: &str = "active";

/// Mount roots for the Leptos components
pub const GALLERY_ROOT_ID: &str = "projectsGallery";
pub const TABLE_ROOT_ID: &str = "recordsTable";
pub const FEEDBACK_ROOT_ID: &str = "feedbackSection";
pub const STATS_ROOT_ID: &str = "statsPanel";
