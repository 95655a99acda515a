//! Payload emitted when a registration is accepted

use crate::validation::{validate_form, FieldId, FormState, ValidationFailure};
use serde::Serialize;
use std::fmt;

const REDACTED: &str = "********";

/// Accepted registration, values exactly as entered
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub specialization: String,
    pub years_of_experience: String,
    pub description: String,
}

impl RegistrationPayload {
    /// JSON view with the password replaced, for logs
    pub fn redacted_json(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        if let Some(password) = value.get_mut(FieldId::Password.key()) {
            *password = serde_json::Value::String(REDACTED.to_string());
        }
        value
    }
}

impl TryFrom<&FormState> for RegistrationPayload {
    type Error = ValidationFailure;

    fn try_from(state: &FormState) -> Result<Self, Self::Error> {
        validate_form(state)?;
        Ok(Self {
            full_name: state.full_name.clone(),
            username: state.username.clone(),
            password: state.password.clone(),
            specialization: state.specialization.clone(),
            years_of_experience: state.years_of_experience.clone(),
            description: state.description.clone(),
        })
    }
}

impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("full_name", &self.full_name)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .field("specialization", &self.specialization)
            .field("years_of_experience", &self.years_of_experience)
            .field("description", &self.description)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_state() -> FormState {
        FormState {
            full_name: "Ada Lovelace".to_string(),
            username: "engineer".to_string(),
            password: "Secret123!".to_string(),
            specialization: "Backend".to_string(),
            years_of_experience: "5".to_string(),
            description: "d".repeat(120),
        }
    }

    #[test]
    fn test_accepted_payload_equals_input() {
        let state = valid_state();
        let payload = RegistrationPayload::try_from(&state).unwrap();
        assert_eq!(payload.full_name, state.full_name);
        assert_eq!(payload.username, state.username);
        assert_eq!(payload.password, state.password);
        assert_eq!(payload.specialization, state.specialization);
        assert_eq!(payload.years_of_experience, state.years_of_experience);
        assert_eq!(payload.description, state.description);
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let state = FormState {
            full_name: "  Ada Lovelace ".to_string(),
            years_of_experience: " 5".to_string(),
            ..valid_state()
        };
        let payload = RegistrationPayload::try_from(&state).unwrap();
        assert_eq!(payload.full_name, "  Ada Lovelace ");
        assert_eq!(payload.years_of_experience, " 5");
    }

    #[test]
    fn test_rejected_state_yields_failure() {
        let state = FormState {
            username: "abc".to_string(),
            ..valid_state()
        };
        assert_eq!(
            RegistrationPayload::try_from(&state),
            Err(ValidationFailure::Incomplete)
        );
    }

    #[test]
    fn test_serializes_with_payload_keys() {
        let payload = RegistrationPayload::try_from(&valid_state()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), FieldId::ALL.len());
        for field in FieldId::ALL {
            assert!(object.contains_key(field.key()), "missing {}", field.key());
        }
        assert_eq!(json["yearsOfExperience"], "5");
    }

    #[test]
    fn test_redacted_json_hides_password() {
        let payload = RegistrationPayload::try_from(&valid_state()).unwrap();
        let json = payload.redacted_json();
        assert_eq!(json["password"], REDACTED);
        assert_eq!(json["username"], "engineer");
    }

    #[test]
    fn test_debug_hides_password() {
        let payload = RegistrationPayload::try_from(&valid_state()).unwrap();
        let debug = format!("{payload:?}");
        assert!(!debug.contains("Secret123!"));
        assert!(debug.contains("engineer"));
    }
}
