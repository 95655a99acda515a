//! Form domain layer
//!
//! Type-safe field values and the registration form built from them.

mod field;
mod form_state;

pub use field::{FieldBinding, FieldHint, FormField};
pub use form_state::{Form, FormButton, RegistrationForm, BUTTONS_ROW};
