//! errors.rs - Custom error types for the formguard-core library.
//!
//! Validation failures are never errors: they come back as data in
//! `ValidationResult` and `FormValidationOutcome`. The variants here describe
//! programmer or configuration defects only, such as asking a registry for a
//! rule it does not know.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use thiserror::Error;

/// The two disjoint rule namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Pattern,
    Allowlist,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Pattern => write!(f, "pattern rule"),
            RuleKind::Allowlist => write!(f, "allowlist field"),
        }
    }
}

/// This enum represents all possible error types in the `formguard-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FormGuardError {
    /// A rule or field name that the registry does not contain.
    #[error("Unknown {kind} '{name}'")]
    UnknownRule { kind: RuleKind, name: String },

    #[error("Failed to compile pattern rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}

impl FormGuardError {
    pub(crate) fn unknown(kind: RuleKind, name: &str) -> Self {
        FormGuardError::UnknownRule {
            kind,
            name: name.to_string(),
        }
    }

    /// Returns true for the unknown-rule programmer error.
    pub fn is_unknown_rule(&self) -> bool {
        matches!(self, FormGuardError::UnknownRule { .. })
    }
}
