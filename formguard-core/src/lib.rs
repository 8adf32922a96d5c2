// formguard-core/src/lib.rs
//! # FormGuard Core Library
//!
//! `formguard-core` validates labeled input strings against named rules and
//! composes those checks into a single form-level validation pass that also
//! sanitizes free text against markup injection.
//!
//! The library is pure and stateless: the rule registries are built once from
//! an embedded catalog, never mutated, and every call is independent.
//!
//! ## Modules
//!
//! * `config`: `RuleCatalog`, `PatternRule` and `AllowlistRule`, plus the embedded catalog loader.
//! * `registry`: the compiled `Registry` with its pattern and allowlist lookups.
//! * `sanitizers`: HTML escaping of free-text fields.
//! * `validators`: calendar checks that regular expressions cannot express.
//! * `form`: the `FormValidator` that aggregates per-field checks.
//! * `validation_result`: `ValidationResult`, `UserForm` and `FormValidationOutcome`.
//! * `errors`: `FormGuardError`, for programmer errors only.
//!
//! ## Usage Example
//!
//! ```rust
//! use formguard_core::{validate_allowlist, validate_form, validate_pattern, UserForm};
//!
//! fn main() -> Result<(), formguard_core::FormGuardError> {
//!     assert!(validate_pattern("test@example.com", "email")?.valid);
//!     assert!(validate_allowlist("admin", "userRole")?.valid);
//!
//!     let form = UserForm::new(
//!         "john_doe",
//!         "john@example.com",
//!         "USER",
//!         "1990-01-01",
//!         "<script>alert('xss')</script>Some notes",
//!     );
//!     let outcome = validate_form(&form);
//!     assert!(outcome.valid);
//!     assert_eq!(
//!         outcome.sanitized_form.notes,
//!         "&lt;script&gt;alert(&#39;xss&#39;)&lt;/script&gt;Some notes"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Failed validation is data: `ValidationResult { valid: false, .. }` or an
//! entry in `FormValidationOutcome::errors`. Asking a registry for a rule it
//! does not have returns `FormGuardError::UnknownRule`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod form;
pub mod pii;
pub mod registry;
pub mod sanitizers;
pub mod validation_result;
pub mod validators;

pub use config::{AllowlistRule, PatternRule, RuleCatalog, MAX_PATTERN_LENGTH};
pub use errors::{FormGuardError, RuleKind};
pub use form::FormValidator;
pub use registry::{Allowlist, CompiledPattern, Registry};
pub use sanitizers::sanitize;
pub use validation_result::{FormValidationOutcome, UserForm, ValidationResult};

/// Validates `input` against a pattern rule of the global registry.
///
/// Absent or blank input yields `{false, "Input cannot be empty"}` before
/// the rule name is looked up.
pub fn validate_pattern<'a>(
    input: impl Into<Option<&'a str>>,
    rule_name: &str,
) -> Result<ValidationResult, FormGuardError> {
    Registry::global().validate_pattern(input, rule_name)
}

/// Validates `input` against an allowlist of the global registry.
pub fn validate_allowlist<'a>(
    input: impl Into<Option<&'a str>>,
    field_name: &str,
) -> Result<ValidationResult, FormGuardError> {
    Registry::global().validate_allowlist(input, field_name)
}

/// Validates a whole form with the global registry.
pub fn validate_form(form: &UserForm) -> FormValidationOutcome {
    FormValidator::global().validate(form)
}
