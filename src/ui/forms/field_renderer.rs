//! Field rendering utilities for forms

use crate::state::{FieldHint, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, mask: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value(mask);
    let display_str = if field.is_blank() && !is_active && !field.is_choice() {
        "(empty)".to_string()
    } else {
        display_value
    };

    // Choice fields are stepped with arrows, no text cursor
    let cursor = if is_active && !field.is_choice() {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the live hint line under a field
pub fn draw_hint(frame: &mut Frame, area: Rect, hint: Option<FieldHint>) {
    let Some(hint) = hint else {
        return;
    };

    let (marker, color) = if hint.is_valid {
        ("✓ ", Color::Green)
    } else {
        ("✗ ", Color::Red)
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(marker, Style::default().fg(color)),
        Span::styled(hint.message, Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the aggregate error line beneath the form
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: &str) {
    if message.is_empty() {
        return;
    }
    let line = Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
