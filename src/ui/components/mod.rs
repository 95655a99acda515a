//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, ButtonKind, BUTTON_HEIGHT};
pub use dialog::{render_confirmation_dialog, render_error_dialog};
