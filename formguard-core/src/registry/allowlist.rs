//! allowlist.rs - Membership checks against fixed sets of uppercase values.

use std::collections::BTreeSet;

use log::debug;

use crate::config::AllowlistRule;
use crate::pii;
use crate::validation_result::{reject_blank, trim_input, ValidationResult};

#[derive(Debug, Clone)]
pub struct Allowlist {
    pub name: String,
    pub description: Option<String>,
    values: BTreeSet<String>,
}

impl Allowlist {
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Whether the trimmed, uppercased `input` is a member.
    pub fn contains(&self, input: &str) -> bool {
        self.values.contains(&trim_input(input).to_uppercase())
    }

    /// Runs the full allowlist check, empty-input precondition included.
    pub fn check(&self, input: Option<&str>) -> ValidationResult {
        if let Some(rejected) = reject_blank(input) {
            return rejected;
        }
        let input = input.unwrap_or_default();
        let allowed = self.contains(input);
        debug!(
            "Allowlist '{}' checked {}: {}",
            self.name,
            pii::loggable(input),
            if allowed { "allowed" } else { "rejected" }
        );
        if allowed {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(format!("Value not allowed for {}", self.name))
        }
    }
}

impl From<AllowlistRule> for Allowlist {
    fn from(rule: AllowlistRule) -> Self {
        Self {
            name: rule.name,
            description: rule.description,
            values: rule.values.into_iter().collect(),
        }
    }
}
