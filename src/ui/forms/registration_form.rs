//! Registration form rendering

use super::field_renderer::{draw_error_line, draw_field, draw_hint};
use crate::app::App;
use crate::state::{FieldBinding, FormButton, BUTTONS_ROW};
use crate::ui::components::{render_button, ButtonKind, BUTTON_HEIGHT};
use crate::validation::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Field box height in rows (top border + content + bottom border)
const FIELD_HEIGHT: u16 = 3;

/// Width of each action button
const BUTTON_WIDTH: u16 = 14;

/// Rows reserved for one field, plus a hint line for live-bound fields
fn field_constraint(id: FieldId, binding: FieldBinding, show_hints: bool) -> Constraint {
    let hint_rows = u16::from(show_hints && binding == FieldBinding::Live);
    match id {
        FieldId::Description => Constraint::Min(FIELD_HEIGHT + 3 + hint_rows),
        _ => Constraint::Length(FIELD_HEIGHT + hint_rows),
    }
}

/// Draw the registration form: fields, actions row and error line
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let show_hints = app.config.show_hints();
    let mask = app.config.mask_password();

    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .fields()
        .map(|field| field_constraint(field.id, field.binding, show_hints))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Actions
    constraints.push(Constraint::Length(1)); // Error line

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (index, field) in form.fields().enumerate() {
        let slot = chunks[index];
        let is_active = form.active_field_index == index;
        let has_hint_row = show_hints && field.binding == FieldBinding::Live;

        if has_hint_row {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(FIELD_HEIGHT), Constraint::Length(1)])
                .split(slot);
            draw_field(frame, parts[0], field, is_active, mask);
            draw_hint(frame, parts[1], field.hint());
        } else {
            draw_field(frame, slot, field, is_active, mask);
        }
    }

    draw_actions(frame, chunks[BUTTONS_ROW], app);
    draw_error_line(
        frame,
        chunks[BUTTONS_ROW + 1],
        &app.state.error_message(),
    );
}

/// Draw the Register and Reset buttons
fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_buttons_row_active();
    let can_submit = app.state.validation().can_submit();

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    for (slot, button) in FormButton::ALL.into_iter().enumerate() {
        // Register looks enabled once every rule passes
        let (kind, is_enabled) = match button {
            FormButton::Register => (ButtonKind::Primary, can_submit),
            FormButton::Reset => (ButtonKind::Secondary, true),
        };
        render_button(
            frame,
            button_chunks[slot],
            button.label(),
            kind,
            is_focused && form.selected_button == button,
            is_enabled,
        );
    }
}
