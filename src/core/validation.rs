//! Validation for the login and register forms
//!
//! One rule table keyed by mode and field. Each field's rules run in order
//! and the first failing rule produces that field's message; fields are
//! checked independently.

use super::form::{ErrorMap, Field, FormData, Mode};

/// Minimum password length for new accounts (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum length of the top-level domain in an email address
const MIN_TLD_LENGTH: usize = 2;

/// A single field rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming whitespace
    Required,
    /// Basic `local@domain.tld` shape
    Email,
    /// At least this many characters
    MinLength(usize),
}

/// Validation failure for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required(Field),
    InvalidEmail,
    TooShort { field: Field, min: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Required(field) => write!(f, "{} is required", label(*field)),
            ValidationError::InvalidEmail => write!(f, "Invalid email"),
            ValidationError::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters", label(*field), min)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Address => "Address",
        Field::Password => "Password",
    }
}

const LOGIN_RULES: &[(Field, &[Rule])] = &[
    (Field::Email, &[Rule::Required, Rule::Email]),
    (Field::Password, &[Rule::Required]),
];

const REGISTER_RULES: &[(Field, &[Rule])] = &[
    (Field::Name, &[Rule::Required]),
    (Field::Email, &[Rule::Required, Rule::Email]),
    (Field::Address, &[Rule::Required]),
    (
        Field::Password,
        &[Rule::Required, Rule::MinLength(MIN_PASSWORD_LENGTH)],
    ),
];

/// Rules for every field of a mode
pub fn rules_for(mode: Mode) -> &'static [(Field, &'static [Rule])] {
    match mode {
        Mode::Login => LOGIN_RULES,
        Mode::Register => REGISTER_RULES,
    }
}

impl Rule {
    fn check(self, field: Field, value: &str) -> Result<(), ValidationError> {
        match self {
            Rule::Required if value.trim().is_empty() => Err(ValidationError::Required(field)),
            Rule::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
            Rule::MinLength(min) if value.chars().count() < min => {
                Err(ValidationError::TooShort { field, min })
            }
            _ => Ok(()),
        }
    }
}

/// Validates one field value against its rules, returning the first failure
pub fn validate_field(mode: Mode, field: Field, value: &str) -> Result<(), ValidationError> {
    rules_for(mode)
        .iter()
        .find(|(f, _)| *f == field)
        .map_or(Ok(()), |(_, rules)| {
            rules.iter().try_for_each(|rule| rule.check(field, value))
        })
}

/// Validates the active payload and returns messages for every failing field
pub fn validate(data: FormData<'_>) -> ErrorMap {
    let mode = data.mode();
    rules_for(mode)
        .iter()
        .filter_map(|(field, _)| {
            let value = data.get(*field).unwrap_or_default();
            validate_field(mode, *field, value)
                .err()
                .map(|e| (*field, e.to_string()))
        })
        .collect()
}

/// Checks the basic `local@domain.tld` shape of an email address
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return false;
    }

    labels
        .last()
        .is_some_and(|tld| tld.chars().count() >= MIN_TLD_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::{LoginPayload, RegisterPayload};

    fn register_with_password(password: &str) -> RegisterPayload {
        RegisterPayload {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            address: "12 Lake Rd".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_empty_login_reports_required_fields() {
        let errors = validate(FormData::Login(&LoginPayload::default()));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
    }

    #[test]
    fn test_empty_register_reports_required_fields() {
        let errors = validate(FormData::Register(&RegisterPayload::default()));

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Address), Some("Address is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
    }

    #[test]
    fn test_valid_login() {
        let payload = LoginPayload {
            email: "user@example.com".to_string(),
            password: "x".to_string(),
        };
        assert!(validate(FormData::Login(&payload)).is_empty());
    }

    #[test]
    fn test_login_invalid_email() {
        let payload = LoginPayload {
            email: "user@example".to_string(),
            password: "x".to_string(),
        };
        let errors = validate(FormData::Login(&payload));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Invalid email"));
    }

    #[test]
    fn test_register_password_min_length() {
        let errors = validate(FormData::Register(&register_with_password("12345")));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 6 characters")
        );

        assert!(validate(FormData::Register(&register_with_password("123456"))).is_empty());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // six characters, more than six bytes
        assert!(validate_field(Mode::Register, Field::Password, "пароль").is_ok());
    }

    #[test]
    fn test_login_has_no_password_length_rule() {
        assert!(validate_field(Mode::Login, Field::Password, "1").is_ok());
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let mut payload = register_with_password("123456");
        payload.name = "   ".to_string();
        payload.address = "\n\t".to_string();

        let errors = validate(FormData::Register(&payload));
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Address), Some("Address is required"));
        assert_eq!(errors.get(Field::Email), None);
    }

    #[test]
    fn test_errors_only_for_active_mode_fields() {
        let errors = validate(FormData::Login(&LoginPayload::default()));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.get(Field::Address), None);
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(is_valid_email("  padded@example.com  "));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@.com"));
    }
}
