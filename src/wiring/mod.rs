//! Static Page Wiring
//!
//! Listeners attached to markup that ships in `index.html`.

pub mod date_stamp;
pub mod menu;
pub mod skills;
pub mod theme;
