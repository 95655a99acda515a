//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, form_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);
    forms::draw_registration(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal dialogs on top, errors first
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    } else if let Some(message) = &app.state.confirmation {
        components::render_confirmation_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::submit::LogSink;
    use crate::validation::{FieldId, Specialization};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app(config: TuiConfig) -> App {
        App::new(config, Box::new(LogSink::new()))
    }

    /// Render one frame and return the screen as text, one line per row
    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 48);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn fill_valid(app: &mut App) {
        let form = &mut app.state.form;
        form.full_name.set_text("Ada Lovelace");
        form.username.set_text("engineer");
        form.password.set_text("Secret123!");
        form.specialization.set_choice(Some(Specialization::Backend));
        form.years_of_experience.set_text("5");
        form.description.set_text("q".repeat(120));
    }

    #[test]
    fn test_empty_form_shows_every_label_and_no_hints() {
        let app = test_app(TuiConfig::default());
        let screen = render(&app);

        for field in FieldId::ALL {
            assert!(screen.contains(field.label()), "missing {}", field.label());
        }
        assert!(screen.contains("-- Select --"));
        assert!(screen.contains("Register"));
        assert!(!screen.contains("username valid"));
        assert!(!screen.contains("must contain only letters"));
    }

    #[test]
    fn test_live_hints_follow_input() {
        let mut app = test_app(TuiConfig::default());
        app.state.form.username.set_text("abc");
        app.state.form.password.set_text("Abc12345!");

        let screen = render(&app);

        assert!(screen.contains("must contain only letters and at least 6 characters"));
        assert!(screen.contains("password valid"));
        assert!(!screen.contains("description valid"));
    }

    #[test]
    fn test_hints_can_be_disabled() {
        let mut app = test_app(TuiConfig {
            show_hints: Some(false),
            ..Default::default()
        });
        app.state.form.username.set_text("abc");

        let screen = render(&app);
        assert!(!screen.contains("must contain only letters"));
    }

    #[test]
    fn test_password_is_masked_by_default() {
        let mut app = test_app(TuiConfig::default());
        app.state.form.password.set_text("Secret123!");

        let screen = render(&app);
        assert!(!screen.contains("Secret123!"));
        assert!(screen.contains("••••••••••"));
    }

    #[test]
    fn test_password_shown_when_masking_disabled() {
        let mut app = test_app(TuiConfig {
            mask_password: Some(false),
            ..Default::default()
        });
        app.state.form.password.set_text("Secret123!");

        let screen = render(&app);
        assert!(screen.contains("Secret123!"));
    }

    #[test]
    fn test_rejection_message_is_shown_beneath_form() {
        let mut app = test_app(TuiConfig::default());
        fill_valid(&mut app);
        app.state.form.years_of_experience.set_text("-2");
        let _ = app.state.attempt_submit();

        let screen = render(&app);
        assert!(screen.contains("years of experience must be a positive number"));
    }

    #[test]
    fn test_error_dialog_is_rendered() {
        let mut app = test_app(TuiConfig::default());
        app.push_error("Failed to submit registration: sink offline");

        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("sink offline"));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_confirmation_dialog_is_rendered() {
        let mut app = test_app(TuiConfig::default());
        app.state.confirmation = Some("Registered engineer".to_string());

        let screen = render(&app);
        assert!(screen.contains("Registration complete"));
        assert!(screen.contains("Registered engineer"));
    }

    #[test]
    fn test_status_bar_shows_shortcuts() {
        let app = test_app(TuiConfig::default());
        let screen = render(&app);
        assert!(screen.contains(":register"));
        assert!(screen.contains("Esc:quit"));
    }
}
