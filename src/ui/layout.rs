//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FormPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, form and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header line
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Sign up ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if app.state.registered_count > 0 {
        spans.push(Span::styled(
            format!("· {} registered", app.state.registered_count),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submit readiness
    let ready = app.state.validation().can_submit();
    let indicator = match app.state.phase {
        FormPhase::Rejected(_) => Span::styled(" ✗ ", Style::default().fg(Color::Red)),
        _ if ready => Span::styled(" ● ", Style::default().fg(Color::Green)),
        _ => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
    };
    spans.push(indicator);

    spans.push(Span::styled(
        form_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the focused part of the form
fn form_hints(app: &App) -> String {
    let form = &app.state.form;
    let focus_hints = if form.is_buttons_row_active() {
        "←/→:button  Enter:press"
    } else if form
        .active_field_id()
        .is_some_and(|id| form.field(id).is_choice())
    {
        "←/→/Space:choose"
    } else if form.is_active_field_multiline() {
        "Enter:newline"
    } else {
        "Enter:next"
    };

    format!("Tab:next  {focus_hints}  {SUBMIT_SHORTCUT}:register  {RESET_SHORTCUT}:reset  Esc:quit")
}
