//! Registration accepted dialog

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render the dialog shown after a registration was accepted
pub fn render_confirmation_dialog(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Registration complete",
            title_color: Color::Green,
            border_color: Color::Green,
            message,
            hint: Some(dismiss_hint("continue")),
            max_width: 50,
        },
    );
}
