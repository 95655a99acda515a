//! Registration validation layer
//!
//! Pure predicates over raw field text plus the aggregate check that decides
//! whether a registration may be submitted. Nothing in here touches the
//! terminal or performs I/O.

mod form;
mod rules;
mod specialization;

pub use form::{
    validate, validate_form, FieldId, FieldValidity, FormState, ValidationFailure,
    ValidationResult,
};
pub use rules::{is_blank, is_description_valid, is_password_valid, is_username_valid};
pub use specialization::Specialization;
