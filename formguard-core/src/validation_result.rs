//! Value types returned by the registries and the form validator.

use serde::{Deserialize, Serialize};

pub const MSG_VALID: &str = "Valid input";
pub const MSG_EMPTY: &str = "Input cannot be empty";

/// Outcome of a single pattern or allowlist check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: MSG_VALID.to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn empty_input() -> Self {
        Self::invalid(MSG_EMPTY)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Strips leading and trailing ASCII control characters and spaces
/// (everything up to U+0020). Other Unicode whitespace such as U+00A0 is
/// kept and takes part in matching.
pub fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Returns the empty-input verdict for absent or whitespace-only input.
///
/// Shared precondition of every registry check; runs before any rule lookup.
pub(crate) fn reject_blank(input: Option<&str>) -> Option<ValidationResult> {
    match input {
        Some(s) if !trim_input(s).is_empty() => None,
        _ => Some(ValidationResult::empty_input()),
    }
}

/// One form submission. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub role: String,
    pub birth_date: String,
    pub notes: String,
}

impl UserForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        birth_date: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            role: role.into(),
            birth_date: birth_date.into(),
            notes: notes.into(),
        }
    }
}

/// Aggregated verdict of a form validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidationOutcome {
    /// True iff `errors` is empty.
    pub valid: bool,
    /// Field errors in check order: username, email, role, birth date.
    pub errors: Vec<String>,
    /// Input form with only `notes` replaced by its sanitized value.
    pub sanitized_form: UserForm,
}

impl FormValidationOutcome {
    pub(crate) fn new(errors: Vec<String>, sanitized_form: UserForm) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            sanitized_form,
        }
    }
}
