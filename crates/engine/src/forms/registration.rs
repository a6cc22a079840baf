//! Registration form.
//!
//! Also used for the login page: same two fields, same rules.

use std::collections::BTreeMap;
use std::fmt;

use charsheets_domain::common::StringExt;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Email + password submission.
///
/// Empty inputs deserialize to `None` so they trip the `required` rule the
/// same way an absent field does. Whitespace is kept and judged by the
/// remaining rules.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct RegistrationForm {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        required(message = "This field is required."),
        email(message = "Invalid email"),
        custom(function = "validate_email_domain", message = "Invalid email"),
        length(max = 50, message = "Field cannot be longer than 50 characters.")
    )]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        required(message = "This field is required."),
        length(
            min = 8,
            max = 20,
            message = "Field must be between 8 and 20 characters long."
        )
    )]
    pub password: Option<String>,
}

/// Outcome of validating a form: a flag plus messages keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormValidation {
    pub valid: bool,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl FormValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// A failed validation carrying a single message for `field`.
    pub fn field_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), vec![message.into()]);
        Self {
            valid: false,
            errors,
        }
    }

    pub fn errors_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

impl From<validator::ValidationErrors> for FormValidation {
    fn from(errors: validator::ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, field_errors)| {
                let messages = field_errors
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        Self {
            valid: false,
            errors,
        }
    }
}

impl RegistrationForm {
    /// Build a form from raw submitted values.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let email: String = email.into();
        let password: String = password.into();
        Self {
            email: email.into_option(),
            password: password.into_option(),
        }
    }

    /// Run every field rule and collect the messages.
    pub fn validate_form(&self) -> FormValidation {
        match self.validate() {
            Ok(()) => FormValidation::ok(),
            Err(errors) => errors.into(),
        }
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// The domain part must contain a dot (`user@localhost` is rejected).
///
/// Addresses without an `@` are left to the `email` rule.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    match email.rsplit_once('@') {
        Some((_, domain)) if !domain.contains('.') => {
            Err(ValidationError::new("email_domain"))
        }
        _ => Ok(()),
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(StringExt::into_option)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_EMAIL: &str = "fighter@example.com";

    fn password_of(len: usize) -> String {
        "x".repeat(len)
    }

    #[test]
    fn valid_submission_has_no_errors() {
        let result = RegistrationForm::new(GOOD_EMAIL, password_of(12)).validate_form();
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let result = RegistrationForm::new("not-an-email", password_of(12)).validate_form();
        assert!(!result.valid);
        assert_eq!(result.errors_for("email"), ["Invalid email"]);
        assert!(result.errors_for("password").is_empty());
    }

    #[test]
    fn password_length_bounds_are_inclusive() {
        for (len, ok) in [(7, false), (8, true), (20, true), (21, false)] {
            let result = RegistrationForm::new(GOOD_EMAIL, password_of(len)).validate_form();
            assert_eq!(result.valid, ok, "password length {len}");
            if !ok {
                assert_eq!(
                    result.errors_for("password"),
                    ["Field must be between 8 and 20 characters long."]
                );
            }
        }
    }

    #[test]
    fn email_longer_than_fifty_is_rejected() {
        let local = "a".repeat(39);
        let email = format!("{local}@example.com");
        assert_eq!(email.chars().count(), 51);
        let result = RegistrationForm::new(email, password_of(10)).validate_form();
        assert_eq!(
            result.errors_for("email"),
            ["Field cannot be longer than 50 characters."]
        );
    }

    #[test]
    fn missing_and_empty_fields_are_required() {
        let result = RegistrationForm::default().validate_form();
        assert_eq!(result.errors_for("email"), ["This field is required."]);
        assert_eq!(result.errors_for("password"), ["This field is required."]);

        let empty = RegistrationForm::new("", "").validate_form();
        assert_eq!(empty.errors_for("email"), ["This field is required."]);
        assert_eq!(empty.errors_for("password"), ["This field is required."]);
    }

    #[test]
    fn whitespace_is_input_not_absence() {
        let spaces = RegistrationForm::new(GOOD_EMAIL, " ".repeat(8)).validate_form();
        assert!(spaces.valid, "{spaces:?}");

        let result = RegistrationForm::new("   ", password_of(10)).validate_form();
        assert_eq!(result.errors_for("email"), ["Invalid email"]);
    }

    #[test]
    fn email_domain_needs_a_dot() {
        let result = RegistrationForm::new("user@localhost", password_of(10)).validate_form();
        assert!(!result.valid);
        assert_eq!(result.errors_for("email"), ["Invalid email"]);

        let dotted = RegistrationForm::new("user@mail.localhost", password_of(10)).validate_form();
        assert!(dotted.valid);
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        let password = "é".repeat(8);
        assert_eq!(password.len(), 16);
        let result = RegistrationForm::new(GOOD_EMAIL, password).validate_form();
        assert!(result.valid);
    }

    #[test]
    fn deserializes_empty_json_values_as_missing() {
        let form: RegistrationForm =
            serde_json::from_str(r#"{"email": "", "password": "longenough"}"#).unwrap();
        assert!(form.email.is_none());
        assert_eq!(form.password.as_deref(), Some("longenough"));
    }

    #[test]
    fn debug_output_redacts_password() {
        let form = RegistrationForm::new(GOOD_EMAIL, "hunter2hunter2");
        let debug = format!("{form:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains(GOOD_EMAIL));
    }
}
