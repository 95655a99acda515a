//! Dialog components for TUI

mod base;
mod confirmation_dialog;
mod error_dialog;

pub use confirmation_dialog::render_confirmation_dialog;
pub use error_dialog::render_error_dialog;
