//! UI Components
//!
//! Leptos components mounted into the page's mount roots.

mod delete_confirm_button;
mod feedback_form;
mod project_gallery;
mod records_table;
mod stats_counter;

pub use delete_confirm_button::DeleteConfirmButton;
pub use feedback_form::FeedbackForm;
pub use project_gallery::ProjectGallery;
pub use records_table::RecordsTable;
pub use stats_counter::StatsCounter;
