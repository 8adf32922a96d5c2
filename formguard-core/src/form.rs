// File: formguard-core/src/form.rs
//! Form-level validation.
//!
//! `FormValidator` resolves the rules it needs when it is built, so that
//! validating a form can only produce a verdict, never a lookup error. Every
//! field is checked even after an earlier one failed, and the notes field is
//! sanitized unconditionally.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::Lazy;

use crate::errors::FormGuardError;
use crate::registry::{Allowlist, CompiledPattern, Registry};
use crate::sanitizers::sanitize;
use crate::validation_result::{FormValidationOutcome, UserForm};
use crate::validators::parse_calendar_date;

pub const USERNAME_RULE: &str = "username";
pub const EMAIL_RULE: &str = "email";
pub const ROLE_FIELD: &str = "userRole";
pub const DATE_RULE: &str = "date";

static GLOBAL_FORM_VALIDATOR: Lazy<FormValidator<'static>> = Lazy::new(|| {
    FormValidator::new(Registry::global()).expect("embedded rule catalog must define the form rules")
});

#[derive(Debug, Clone, Copy)]
pub struct FormValidator<'r> {
    username: &'r CompiledPattern,
    email: &'r CompiledPattern,
    role: &'r Allowlist,
    date: &'r CompiledPattern,
}

impl<'r> FormValidator<'r> {
    /// Looks up the username, email, date and userRole rules in `registry`.
    pub fn new(registry: &'r Registry) -> Result<Self, FormGuardError> {
        Ok(Self {
            username: registry.pattern(USERNAME_RULE)?,
            email: registry.pattern(EMAIL_RULE)?,
            role: registry.allowlist(ROLE_FIELD)?,
            date: registry.pattern(DATE_RULE)?,
        })
    }

    /// Validator bound to the global registry.
    pub fn global() -> &'static FormValidator<'static> {
        &GLOBAL_FORM_VALIDATOR
    }

    /// Checks every field of `form` and returns the aggregated outcome.
    ///
    /// Errors are ordered username, email, role, birth date.
    pub fn validate(&self, form: &UserForm) -> FormValidationOutcome {
        let mut errors = Vec::new();

        let username = self.username.check(Some(form.username.as_str()));
        if !username.is_valid() {
            errors.push(format!("Username: {}", username.message));
        }

        let email = self.email.check(Some(form.email.as_str()));
        if !email.is_valid() {
            errors.push(format!("Email: {}", email.message));
        }

        let role = self.role.check(Some(form.role.as_str()));
        if !role.is_valid() {
            errors.push(format!("Role: {}", role.message));
        }

        if let Some(e) = self.birth_date_error(&form.birth_date) {
            errors.push(format!("Birth Date: {}", e));
        }

        let sanitized_form = UserForm {
            notes: sanitize(form.notes.as_str()),
            ..form.clone()
        };

        debug!("Form validated with {} error(s).", errors.len());
        FormValidationOutcome::new(errors, sanitized_form)
    }

    /// Shape first, then calendar. The two failures carry different messages.
    fn birth_date_error(&self, birth_date: &str) -> Option<String> {
        if !self.date.check(Some(birth_date)).is_valid() {
            return Some("Invalid date format".to_string());
        }
        parse_calendar_date(birth_date).err().map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserForm {
        UserForm::new(
            "john_doe",
            "john@example.com",
            "USER",
            "1990-01-01",
            "<script>alert('xss')</script>Some notes",
        )
    }

    #[test]
    fn test_valid_form() {
        let outcome = FormValidator::global().validate(&sample());
        assert!(outcome.valid);
        assert!(outcome.errors.is_empty());
        assert_eq!(
            outcome.sanitized_form.notes,
            "&lt;script&gt;alert(&#39;xss&#39;)&lt;/script&gt;Some notes"
        );
    }

    #[test]
    fn test_birth_date_messages_differ() {
        let validator = FormValidator::global();
        let shape = validator.birth_date_error("01-01-1990");
        let calendar = validator.birth_date_error("2021-02-30");
        assert_eq!(shape.as_deref(), Some("Invalid date format"));
        assert_eq!(calendar.as_deref(), Some("input is out of range"));
        assert_eq!(validator.birth_date_error("1990-01-01"), None);
    }

    #[test]
    fn test_validator_over_a_private_registry() -> Result<(), FormGuardError> {
        let registry = Registry::load_default()?;
        let validator = FormValidator::new(&registry)?;
        assert!(validator.validate(&sample()).valid);
        Ok(())
    }
}
