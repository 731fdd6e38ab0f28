//! Theme Resolution

use crate::models::Theme;

/// Stored `"dark"` wins, any other stored value means light; with nothing
/// stored, follow the platform color scheme.
pub fn resolve_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored {
        Some("dark") => Theme::Dark,
        Some(_) => Theme::Light,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Theme chosen by the toggle's checked state
pub fn from_checked(checked: bool) -> Theme {
    if checked { Theme::Dark } else { Theme::Light }
}
