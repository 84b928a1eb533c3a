pub mod layout;
mod quiz;
mod status;
mod summary;

pub use layout::{calculate_quiz_chunks, calculate_summary_chunks};
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use status::{draw_load_error, draw_loading, draw_submitting};
pub use summary::draw_summary;
