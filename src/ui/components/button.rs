//! Action buttons for the form

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// How prominent a button is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Completes the form, highlighted once it can be used
    Primary,
    /// Side actions such as clearing the form
    Secondary,
}

impl ButtonKind {
    fn accent(self) -> Color {
        match self {
            Self::Primary => Color::Green,
            Self::Secondary => Color::Yellow,
        }
    }
}

/// Render a bordered action button
///
/// Disabled buttons can still take focus; they are drawn dimmed and keep a
/// plain border so the focus ring stays visible.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    kind: ButtonKind,
    is_selected: bool,
    is_enabled: bool,
) {
    let accent = if is_enabled {
        kind.accent()
    } else {
        Color::DarkGray
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };

    let (border_type, border_color) = match (is_selected, is_enabled) {
        (true, _) => (BorderType::Thick, Color::Cyan),
        (false, true) => (BorderType::Rounded, accent),
        (false, false) => (BorderType::Plain, Color::DarkGray),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(text_style)
        .block(block);

    frame.render_widget(paragraph, area);
}
