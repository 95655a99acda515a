//! Form field value objects

use crate::validation::{
    is_blank, is_description_valid, is_password_valid, is_username_valid, FieldId,
    Specialization,
};

/// Character used to mask secret fields
const MASK_CHAR: char = '•';

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// `None` is the "-- Select --" placeholder
    Choice(Option<Specialization>),
}

/// When a field's value is picked up by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldBinding {
    /// Re-evaluated on every change, shows a live hint
    Live,
    /// Read once when the form is submitted
    OnSubmit,
}

/// Live validity hint shown under a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHint {
    pub is_valid: bool,
    pub message: &'static str,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: FieldValue,
    pub binding: FieldBinding,
    pub is_multiline: bool,
    pub is_secret: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(id: FieldId, binding: FieldBinding, is_multiline: bool) -> Self {
        Self {
            id,
            value: FieldValue::Text(String::new()),
            binding,
            is_multiline,
            is_secret: false,
        }
    }

    /// Create a new masked text field
    pub fn secret(id: FieldId, binding: FieldBinding) -> Self {
        Self {
            is_secret: true,
            ..Self::text(id, binding, false)
        }
    }

    /// Create a new choice field with the placeholder selected
    pub fn choice(id: FieldId, binding: FieldBinding) -> Self {
        Self {
            id,
            value: FieldValue::Choice(None),
            binding,
            is_multiline: false,
            is_secret: false,
        }
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice(_))
    }

    /// Get the raw value (empty string while a choice shows the placeholder)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(Some(choice)) => choice.label(),
            FieldValue::Choice(None) => "",
        }
    }

    pub fn is_blank(&self) -> bool {
        is_blank(self.as_text())
    }

    /// Set the text value (ignored by choice fields)
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.into();
        }
    }

    /// Select a choice (ignored by text fields)
    pub fn set_choice(&mut self, choice: Option<Specialization>) {
        if let FieldValue::Choice(current) = &mut self.value {
            *current = choice;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Choice(current) => {
                // Space steps through the options like a select box
                if c == ' ' {
                    *current = Specialization::cycle_next(*current);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice(current) => *current = None,
        }
    }

    pub fn select_next(&mut self) {
        if let FieldValue::Choice(current) = &mut self.value {
            *current = Specialization::cycle_next(*current);
        }
    }

    pub fn select_prev(&mut self) {
        if let FieldValue::Choice(current) = &mut self.value {
            *current = Specialization::cycle_prev(*current);
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, mask_secret: bool) -> String {
        match &self.value {
            FieldValue::Text(s) if self.is_secret && mask_secret => {
                std::iter::repeat(MASK_CHAR).take(s.chars().count()).collect()
            }
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(Some(choice)) => format!("◂ {choice} ▸"),
            FieldValue::Choice(None) => "◂ -- Select -- ▸".to_string(),
        }
    }

    /// Live hint for live-bound fields, `None` until something is typed
    pub fn hint(&self) -> Option<FieldHint> {
        if self.binding != FieldBinding::Live || self.is_blank() {
            return None;
        }

        let value = self.as_text();
        let (is_valid, valid_message, invalid_message) = match self.id {
            FieldId::Username => (
                is_username_valid(value),
                "username valid",
                "must contain only letters and at least 6 characters",
            ),
            FieldId::Password => (
                is_password_valid(value),
                "password valid",
                "min 8 characters, letters, numbers and symbols",
            ),
            FieldId::Description => (
                is_description_valid(value),
                "description valid",
                "must contain at least 100 and fewer than 1000 characters",
            ),
            _ => return None,
        };

        Some(FieldHint {
            is_valid,
            message: if is_valid { valid_message } else { invalid_message },
        })
    }
}
