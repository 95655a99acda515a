//! Application state definitions

use super::forms::{Form, RegistrationForm};
use crate::submit::RegistrationPayload;
use crate::validation::{validate, FieldValidity, ValidationFailure, ValidationResult};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use uuid::Uuid;

/// Identity of one form session, used to tag log events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the current session is in the submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Last submit attempt failed; the form stays editable
    Rejected(ValidationFailure),
    /// Payload handed over, waiting for the sink to finish
    Accepted,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    pub phase: FormPhase,
    pub session: FormSession,

    // Modal dialogs
    pub error_queue: VecDeque<String>,
    pub confirmation: Option<String>,

    // Counters
    pub registered_count: usize,
}

impl AppState {
    /// Aggregate error shown beneath the form, empty unless rejected
    pub fn error_message(&self) -> String {
        match self.phase {
            FormPhase::Rejected(failure) => failure.to_string(),
            _ => String::new(),
        }
    }

    /// Validate the form as it currently stands without changing state
    pub fn validation(&self) -> ValidationResult {
        validate(&self.form.read_state())
    }

    /// Read the form, validate it and record the outcome
    ///
    /// On rejection the focus moves to the first failing field.
    pub fn attempt_submit(&mut self) -> Result<RegistrationPayload, ValidationFailure> {
        let state = self.form.read_state();
        match RegistrationPayload::try_from(&state) {
            Ok(payload) => {
                self.phase = FormPhase::Accepted;
                Ok(payload)
            }
            Err(failure) => {
                self.phase = FormPhase::Rejected(failure);
                if let Some(field) = FieldValidity::of(&state).first_invalid() {
                    self.form.focus(field);
                }
                Err(failure)
            }
        }
    }

    /// Discard the form and start a new session
    pub fn reset_form(&mut self) {
        self.form = RegistrationForm::new();
        self.phase = FormPhase::Editing;
        self.session = FormSession::new();
    }

    /// Record a successful hand-over and start over
    pub fn complete_submission(&mut self, payload: &RegistrationPayload) {
        self.registered_count += 1;
        self.confirmation = Some(format!("Registered {}", payload.username));
        self.reset_form();
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    /// Handle character input in form
    pub fn form_input_char(&mut self, c: char) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_char(c);
        }
    }

    /// Handle backspace in form
    pub fn form_backspace(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
        }
    }

    /// Insert a newline into the focused multiline field
    pub fn form_newline(&mut self) {
        if self.form.is_active_field_multiline() {
            self.form_input_char('\n');
        }
    }

    /// Step the focused choice field forward
    pub fn form_select_next(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.select_next();
        }
    }

    /// Step the focused choice field backward
    pub fn form_select_prev(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.select_prev();
        }
    }
}
