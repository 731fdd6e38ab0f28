//! Page Models
//!
//! Records rendered by the gallery and table, plus persisted values.

use serde::{Deserialize, Serialize};

/// Project category; `Mobile` doubles as the catch-all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Bot,
    Mobile,
}

impl ProjectCategory {
    /// Parse a `data-filter` value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "web" => Some(Self::Web),
            "bot" => Some(Self::Bot),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Bot => "bot",
            Self::Mobile => "mobile",
        }
    }

    /// Font Awesome glyph shown on the card
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Web => "globe",
            Self::Bot => "robot",
            Self::Mobile => "mobile-alt",
        }
    }
}

/// Gallery card data (static, never mutated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub technologies: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowStatus {
    Completed,
    InProgress,
}

impl RowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Завершён",
            Self::InProgress => "В работе",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Completed => "status completed",
            Self::InProgress => "status in-progress",
        }
    }
}

/// Records table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub technologies: String,
    pub date: String,
    pub status: RowStatus,
    pub url: String,
}

/// Persisted color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Self::Dark
    }
}

/// One accepted contact form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}
