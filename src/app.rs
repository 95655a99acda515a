//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::{is_shortcut, is_text_input};
use crate::state::{AppState, FormButton, FormPhase};
use crate::submit::{RegistrationPayload, SubmissionSink};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Receives accepted registrations
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Registration accepted in quit-on-submit mode
    pub accepted: Option<RegistrationPayload>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, sink: Box<dyn SubmissionSink>) -> Self {
        let state = AppState::default();
        tracing::debug!(session_id = %state.session.id, "Form session started");
        Self {
            state,
            config,
            sink,
            quit: false,
            status_message: None,
            accepted: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Confirmation dialog (modal)
        if self.state.confirmation.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.confirmation = None;
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if is_shortcut(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit().await;
                    return Ok(());
                }
                KeyCode::Char('r') => {
                    self.reset();
                    return Ok(());
                }
                _ => {}
            }
        }

        let on_action_panel = self.state.form.is_buttons_row_active();
        let on_choice = self
            .state
            .form
            .active_field_id()
            .is_some_and(|id| self.state.form.field(id).is_choice());

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Left if on_action_panel => self.state.form.prev_button(),
            KeyCode::Right if on_action_panel => self.state.form.next_button(),
            KeyCode::Left if on_choice => self.state.form_select_prev(),
            KeyCode::Right if on_choice => self.state.form_select_next(),
            KeyCode::Enter if on_action_panel => match self.state.form.selected_button {
                FormButton::Register => self.submit().await,
                FormButton::Reset => self.reset(),
            },
            KeyCode::Enter if self.state.form.is_active_field_multiline() => {
                self.state.form_newline()
            }
            KeyCode::Enter => self.state.next_form_field(),
            KeyCode::Char(c) if is_text_input(key.modifiers) => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }

        Ok(())
    }

    /// Validate the form and hand an accepted payload to the sink
    async fn submit(&mut self) {
        let session_id = self.state.session.id;
        let payload = match self.state.attempt_submit() {
            Ok(payload) => payload,
            Err(failure) => {
                tracing::debug!(%session_id, %failure, "Registration rejected");
                return;
            }
        };

        match self.sink.submit(&self.state.session, &payload).await {
            Ok(()) => {
                tracing::info!(%session_id, username = %payload.username, "Registration accepted");
                self.state.complete_submission(&payload);
                self.status_message = Some(format!(
                    "{} registration(s) this run",
                    self.state.registered_count
                ));
                if self.config.quit_on_submit() {
                    self.accepted = Some(payload);
                    self.quit = true;
                }
            }
            Err(err) => {
                tracing::warn!(%session_id, "Submission failed: {err:#}");
                self.state.phase = FormPhase::Editing;
                self.push_error(format!("Failed to submit registration: {err}"));
            }
        }
    }

    /// Clear the form and start a new session
    fn reset(&mut self) {
        self.state.reset_form();
        tracing::debug!(session_id = %self.state.session.id, "Form reset");
        self.status_message = Some("Form cleared".to_string());
    }
}
