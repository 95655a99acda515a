//! Registration form state

use super::field::{FieldBinding, FormField};
use crate::validation::{FieldId, FormState};

/// Index of the actions row in the focus order
pub const BUTTONS_ROW: usize = FieldId::ALL.len();

/// Buttons on the actions row, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Register,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [Self::Register, Self::Reset];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Reset => "Reset",
        }
    }
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The registration form: six fields plus an actions row
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub full_name: FormField,
    pub username: FormField,
    pub password: FormField,
    pub specialization: FormField,
    pub years_of_experience: FormField,
    pub description: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the actions row
    pub selected_button: FormButton,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text(FieldId::FullName, FieldBinding::OnSubmit, false),
            username: FormField::text(FieldId::Username, FieldBinding::Live, false),
            password: FormField::secret(FieldId::Password, FieldBinding::Live),
            specialization: FormField::choice(FieldId::Specialization, FieldBinding::OnSubmit),
            years_of_experience: FormField::text(
                FieldId::YearsOfExperience,
                FieldBinding::OnSubmit,
                false,
            ),
            description: FormField::text(FieldId::Description, FieldBinding::Live, true),
            active_field_index: 0,
            selected_button: FormButton::Register,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FullName => &self.full_name,
            FieldId::Username => &self.username,
            FieldId::Password => &self.password,
            FieldId::Specialization => &self.specialization,
            FieldId::YearsOfExperience => &self.years_of_experience,
            FieldId::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FullName => &mut self.full_name,
            FieldId::Username => &mut self.username,
            FieldId::Password => &mut self.password,
            FieldId::Specialization => &mut self.specialization,
            FieldId::YearsOfExperience => &mut self.years_of_experience,
            FieldId::Description => &mut self.description,
        }
    }

    /// Fields in display order
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        FieldId::ALL.into_iter().map(move |id| self.field(id))
    }

    /// The focused field, `None` on the actions row
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    pub fn focus(&mut self, id: FieldId) {
        self.active_field_index = id.index();
    }

    /// Returns true if the actions row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = match self.selected_button {
            FormButton::Register => FormButton::Reset,
            FormButton::Reset => FormButton::Register,
        };
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        // Two buttons, so backwards is the same move
        self.next_button();
    }

    /// Read every field as it currently stands
    ///
    /// Live-bound fields already hold their latest value; read-on-submit
    /// fields are only looked at here.
    pub fn read_state(&self) -> FormState {
        FormState {
            full_name: self.full_name.as_text().to_string(),
            username: self.username.as_text().to_string(),
            password: self.password.as_text().to_string(),
            specialization: self.specialization.as_text().to_string(),
            years_of_experience: self.years_of_experience.as_text().to_string(),
            description: self.description.as_text().to_string(),
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        BUTTONS_ROW + 1 // six fields, actions row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let id = self.active_field_id()?;
        Some(self.field_mut(id))
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldId::ALL.get(index).map(|id| self.field(*id))
    }
}
