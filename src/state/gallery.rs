//! Project Gallery State
//!
//! Category filtering over the static project list.

use crate::models::{Project, ProjectCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    /// Parse a button's `data-filter`; unknown values fall back to `All`
    pub fn parse(value: &str) -> Self {
        ProjectCategory::parse(value).map_or(Self::All, Self::Category)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(c) => c.as_str(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => project.category == *c,
        }
    }
}

/// Filter buttons in display order
pub const FILTER_BUTTONS: &[(&str, &str)] = &[
    ("all", "Все"),
    ("web", "Веб-сайты"),
    ("bot", "Боты"),
    ("mobile", "Другое"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    SelectFilter(ProjectFilter),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    pub projects: Vec<Project>,
    pub filter: ProjectFilter,
}

impl GalleryState {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects, filter: ProjectFilter::All }
    }

    pub fn apply(&mut self, action: GalleryAction) {
        match action {
            GalleryAction::SelectFilter(filter) => self.filter = filter,
        }
    }

    /// Matching projects in source order
    pub fn visible(&self) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| self.filter.matches(p))
            .cloned()
            .collect()
    }

    pub fn shown(&self) -> usize {
        self.projects.iter().filter(|p| self.filter.matches(p)).count()
    }

    pub fn total(&self) -> usize {
        self.projects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_filter_parse() {
        assert_eq!(ProjectFilter::parse("all"), ProjectFilter::All);
        assert_eq!(ProjectFilter::parse("bot"), ProjectFilter::Category(ProjectCategory::Bot));
        assert_eq!(ProjectFilter::parse("???"), ProjectFilter::All);
    }

    #[test]
    fn test_each_category_shows_only_its_cards() {
        let mut state = GalleryState::new(seed::projects());
        for category in [ProjectCategory::Web, ProjectCategory::Bot, ProjectCategory::Mobile] {
            state.apply(GalleryAction::SelectFilter(ProjectFilter::Category(category)));
            let visible = state.visible();
            let expected = state.projects.iter().filter(|p| p.category == category).count();
            assert!(visible.iter().all(|p| p.category == category));
            assert_eq!(visible.len(), expected);
            assert_eq!(state.shown(), expected);
            assert_eq!(state.total(), 7);
        }
    }

    #[test]
    fn test_all_keeps_source_order() {
        let mut state = GalleryState::new(seed::projects());
        state.apply(GalleryAction::SelectFilter(ProjectFilter::Category(ProjectCategory::Web)));
        state.apply(GalleryAction::SelectFilter(ProjectFilter::All));
        assert_eq!(state.visible(), seed::projects());
        assert_eq!(state.shown(), state.total());
    }

    #[test]
    fn test_rerender_is_stable() {
        let state = GalleryState::new(seed::projects());
        let first: Vec<String> = state.visible().into_iter().map(|p| p.title).collect();
        let second: Vec<String> = state.visible().into_iter().map(|p| p.title).collect();
        assert_eq!(first, second);
    }
}
