//! Page State
//!
//! One plain state slice per page module. Nothing here touches the DOM.

pub mod date_stamp;
pub mod feedback;
pub mod gallery;
pub mod menu;
pub mod records;
pub mod skills;
pub mod stats;
pub mod theme;
