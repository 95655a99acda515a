//! Aggregate form validation

use super::rules::{
    is_blank, is_description_valid, is_full_name_valid, is_password_valid,
    is_specialization_valid, is_username_valid, is_years_valid,
};
use thiserror::Error;

/// The six registration fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Username,
    Password,
    Specialization,
    YearsOfExperience,
    Description,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        Self::FullName,
        Self::Username,
        Self::Password,
        Self::Specialization,
        Self::YearsOfExperience,
        Self::Description,
    ];

    /// Key used in the submitted payload
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Username => "username",
            Self::Password => "password",
            Self::Specialization => "specialization",
            Self::YearsOfExperience => "yearsOfExperience",
            Self::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::Specialization => "Specialization",
            Self::YearsOfExperience => "Years of Experience",
            Self::Description => "Short Description",
        }
    }

    /// Position in display order
    pub fn index(&self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Username => 1,
            Self::Password => 2,
            Self::Specialization => 3,
            Self::YearsOfExperience => 4,
            Self::Description => 5,
        }
    }
}

/// Raw field values of one form session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub full_name: String,
    pub username: String,
    pub password: String,
    /// Option label, empty while the placeholder is selected
    pub specialization: String,
    /// Raw numeric text as typed
    pub years_of_experience: String,
    pub description: String,
}

impl FormState {
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::Username => &self.username,
            FieldId::Password => &self.password,
            FieldId::Specialization => &self.specialization,
            FieldId::YearsOfExperience => &self.years_of_experience,
            FieldId::Description => &self.description,
        }
    }
}

/// Why a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// A required field is blank or a format rule failed
    #[error("All fields must be filled in")]
    Incomplete,
    /// Everything else passed but the years value is not a positive number
    #[error("years of experience must be a positive number")]
    InvalidYears,
}

/// Result of every per-field predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidity {
    pub full_name: bool,
    pub username: bool,
    pub password: bool,
    pub specialization: bool,
    pub years_of_experience: bool,
    pub description: bool,
}

impl FieldValidity {
    pub fn of(state: &FormState) -> Self {
        Self {
            full_name: is_full_name_valid(&state.full_name),
            username: is_username_valid(&state.username),
            password: is_password_valid(&state.password),
            specialization: is_specialization_valid(&state.specialization),
            years_of_experience: is_years_valid(&state.years_of_experience),
            description: is_description_valid(&state.description),
        }
    }

    pub fn is_valid(&self, field: FieldId) -> bool {
        match field {
            FieldId::FullName => self.full_name,
            FieldId::Username => self.username,
            FieldId::Password => self.password,
            FieldId::Specialization => self.specialization,
            FieldId::YearsOfExperience => self.years_of_experience,
            FieldId::Description => self.description,
        }
    }

    pub fn all_valid(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.is_valid(*field))
    }

    /// First failing field in display order
    pub fn first_invalid(&self) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|field| !self.is_valid(*field))
    }
}

/// Per-field validity plus the aggregate submit decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub fields: FieldValidity,
    pub failure: Option<ValidationFailure>,
}

impl ValidationResult {
    /// Message shown beneath the form, empty when nothing failed
    pub fn error_message(&self) -> String {
        self.failure.map(|f| f.to_string()).unwrap_or_default()
    }

    pub fn can_submit(&self) -> bool {
        self.failure.is_none() && self.fields.all_valid()
    }
}

/// Decide whether the form may be submitted
///
/// Blank required fields and format failures collapse into
/// [`ValidationFailure::Incomplete`]. The numeric years check only runs once
/// those pass.
pub fn validate_form(state: &FormState) -> Result<(), ValidationFailure> {
    let complete = FieldId::ALL
        .into_iter()
        .all(|field| !is_blank(state.value(field)))
        && is_specialization_valid(&state.specialization)
        && is_username_valid(&state.username)
        && is_password_valid(&state.password)
        && is_description_valid(&state.description);

    if !complete {
        return Err(ValidationFailure::Incomplete);
    }

    if !is_years_valid(&state.years_of_experience) {
        return Err(ValidationFailure::InvalidYears);
    }

    Ok(())
}

pub fn validate(state: &FormState) -> ValidationResult {
    ValidationResult {
        fields: FieldValidity::of(state),
        failure: validate_form(state).err(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description_of(len: usize) -> String {
        "x".repeat(len)
    }

    fn valid_state() -> FormState {
        FormState {
            full_name: "Ada Lovelace".to_string(),
            username: "engineer".to_string(),
            password: "Secret123!".to_string(),
            specialization: "Backend".to_string(),
            years_of_experience: "5".to_string(),
            description: description_of(120),
        }
    }

    mod aggregate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_state_can_submit() {
            let result = validate(&valid_state());
            assert!(result.can_submit());
            assert_eq!(result.error_message(), "");
            assert!(result.fields.all_valid());
        }

        #[test]
        fn test_short_username_is_rejected() {
            let state = FormState {
                username: "abc".to_string(),
                ..valid_state()
            };
            let result = validate(&state);
            assert!(!result.can_submit());
            assert_eq!(result.error_message(), "All fields must be filled in");
            assert!(!result.fields.username);
        }

        #[test]
        fn test_blank_full_name_is_rejected() {
            let state = FormState {
                full_name: "   ".to_string(),
                ..valid_state()
            };
            assert_eq!(validate_form(&state), Err(ValidationFailure::Incomplete));
        }

        #[test]
        fn test_placeholder_specialization_is_rejected() {
            let state = FormState {
                specialization: String::new(),
                ..valid_state()
            };
            assert_eq!(validate_form(&state), Err(ValidationFailure::Incomplete));
        }

        #[test]
        fn test_blank_years_uses_generic_message() {
            let state = FormState {
                years_of_experience: " ".to_string(),
                ..valid_state()
            };
            assert_eq!(validate_form(&state), Err(ValidationFailure::Incomplete));
        }

        #[test]
        fn test_non_positive_years_uses_distinct_message() {
            for years in ["0", "-3", "abc", "NaN"] {
                let state = FormState {
                    years_of_experience: years.to_string(),
                    ..valid_state()
                };
                let result = validate(&state);
                assert_eq!(result.failure, Some(ValidationFailure::InvalidYears));
                assert_eq!(
                    result.error_message(),
                    "years of experience must be a positive number"
                );
                assert!(!result.can_submit());
            }
        }

        #[test]
        fn test_generic_failure_wins_over_years() {
            let state = FormState {
                password: "weak".to_string(),
                years_of_experience: "-1".to_string(),
                ..valid_state()
            };
            assert_eq!(validate_form(&state), Err(ValidationFailure::Incomplete));
        }

        #[test]
        fn test_fractional_years_can_submit() {
            let state = FormState {
                years_of_experience: "2.5".to_string(),
                ..valid_state()
            };
            assert!(validate(&state).can_submit());
        }

        #[test]
        fn test_description_out_of_range_is_rejected() {
            for len in [99, 1000] {
                let state = FormState {
                    description: description_of(len),
                    ..valid_state()
                };
                assert_eq!(validate_form(&state), Err(ValidationFailure::Incomplete));
            }
        }

        #[test]
        fn test_validate_is_idempotent() {
            let state = FormState {
                password: "abcdefgh".to_string(),
                ..valid_state()
            };
            assert_eq!(validate(&state), validate(&state));
        }

        #[test]
        fn test_message_present_iff_some_field_fails() {
            let candidates = [
                valid_state(),
                FormState::default(),
                FormState {
                    years_of_experience: "0".to_string(),
                    ..valid_state()
                },
                FormState {
                    description: description_of(10),
                    ..valid_state()
                },
            ];
            for state in candidates {
                let result = validate(&state);
                assert_eq!(
                    result.error_message().is_empty(),
                    result.fields.all_valid(),
                    "state: {state:?}"
                );
            }
        }
    }

    mod field_validity {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_first_invalid_follows_display_order() {
            let state = FormState {
                password: String::new(),
                description: String::new(),
                ..valid_state()
            };
            let fields = FieldValidity::of(&state);
            assert_eq!(fields.first_invalid(), Some(FieldId::Password));
        }

        #[test]
        fn test_first_invalid_none_when_all_valid() {
            assert_eq!(FieldValidity::of(&valid_state()).first_invalid(), None);
        }

        #[test]
        fn test_empty_state_fails_everything() {
            let fields = FieldValidity::of(&FormState::default());
            for field in FieldId::ALL {
                assert!(!fields.is_valid(field), "{field:?} should be invalid");
            }
        }
    }

    mod field_id {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_index_matches_display_order() {
            for (position, field) in FieldId::ALL.iter().enumerate() {
                assert_eq!(field.index(), position);
            }
        }

        #[test]
        fn test_value_reads_matching_field() {
            let state = valid_state();
            assert_eq!(state.value(FieldId::FullName), "Ada Lovelace");
            assert_eq!(state.value(FieldId::YearsOfExperience), "5");
            assert_eq!(state.value(FieldId::Specialization), "Backend");
        }

        #[test]
        fn test_keys_are_camel_case() {
            let keys: Vec<_> = FieldId::ALL.iter().map(|f| f.key()).collect();
            assert_eq!(
                keys,
                vec![
                    "fullName",
                    "username",
                    "password",
                    "specialization",
                    "yearsOfExperience",
                    "description"
                ]
            );
        }
    }
}
