//! Navigation Menu State

/// Whether the collapsible nav list is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    pub fn close(self) -> Self {
        Self { open: false }
    }

    /// Icon class for the toggle control
    pub fn icon_class(&self) -> &'static str {
        if self.open { "fas fa-times" } else { "fas fa-bars" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_swaps_icon() {
        let menu = MenuState::default();
        assert_eq!(menu.icon_class(), "fas fa-bars");
        let menu = menu.toggle();
        assert!(menu.open);
        assert_eq!(menu.icon_class(), "fas fa-times");
        assert!(!menu.toggle().open);
    }

    #[test]
    fn test_close_is_idempotent() {
        let menu = MenuState { open: true }.close();
        assert_eq!(menu, MenuState::default());
        assert_eq!(menu.close(), menu);
    }
}
