//! The pattern and allowlist registries.
//!
//! A `Registry` is built once from a `RuleCatalog` and never mutated afterwards,
//! so a shared reference can be read from any number of threads without
//! locking. `Registry::global()` holds the process-wide instance compiled from
//! the embedded catalog on first use.
//!
//! Lookups of unknown names are programmer errors and come back as
//! `FormGuardError::UnknownRule`; validation failures come back as
//! `ValidationResult { valid: false, .. }`.
//!
//! License: MIT OR APACHE 2.0

pub mod allowlist;
pub mod compiler;

use std::collections::BTreeMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::config::{validate_catalog, RuleCatalog};
use crate::errors::{FormGuardError, RuleKind};
use crate::pii;
use crate::validation_result::{reject_blank, ValidationResult};

pub use allowlist::Allowlist;
pub use compiler::{compile_patterns, CompiledPattern, CompiledPatterns};

static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(|| {
    // The catalog is embedded at compile time and covered by unit tests, so a
    // failure here is a build defect rather than a runtime condition.
    Registry::load_default().expect("embedded rule catalog must compile")
});

impl CompiledPattern {
    /// Runs the full pattern check, empty-input precondition included.
    ///
    /// The match runs against the untrimmed input; trimming only decides
    /// emptiness.
    pub fn check(&self, input: Option<&str>) -> ValidationResult {
        if let Some(rejected) = reject_blank(input) {
            return rejected;
        }
        let input = input.unwrap_or_default();
        let matched = self.is_full_match(input);
        debug!(
            "Pattern '{}' checked {}: {}",
            self.name,
            pii::loggable(input),
            if matched { "match" } else { "no match" }
        );
        if matched {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(format!("Invalid format for {}", self.name))
        }
    }
}

#[derive(Debug)]
pub struct Registry {
    patterns: BTreeMap<String, CompiledPattern>,
    allowlists: BTreeMap<String, Allowlist>,
}

impl Registry {
    /// Validates `catalog` and compiles it into a registry.
    ///
    /// Duplicate names and lowercase allowlist values are rejected here, so a
    /// registry never holds a member that could not match.
    pub fn from_catalog(catalog: RuleCatalog) -> Result<Self, FormGuardError> {
        validate_catalog(&catalog)?;
        let compiled = compile_patterns(catalog.patterns)?;
        let patterns: BTreeMap<String, CompiledPattern> = compiled
            .rules
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();
        let allowlists: BTreeMap<String, Allowlist> = catalog
            .allowlists
            .into_iter()
            .map(|rule| (rule.name.clone(), Allowlist::from(rule)))
            .collect();

        debug!(
            "Registry ready with {} pattern rules and {} allowlists.",
            patterns.len(),
            allowlists.len()
        );
        Ok(Self {
            patterns,
            allowlists,
        })
    }

    /// Builds a fresh registry from the embedded catalog.
    pub fn load_default() -> Result<Self, FormGuardError> {
        let catalog = RuleCatalog::load_default_rules()?;
        Self::from_catalog(catalog)
    }

    /// The shared, lazily built registry for the embedded catalog.
    pub fn global() -> &'static Registry {
        &GLOBAL_REGISTRY
    }

    pub fn pattern(&self, name: &str) -> Result<&CompiledPattern, FormGuardError> {
        self.patterns
            .get(name)
            .ok_or_else(|| FormGuardError::unknown(RuleKind::Pattern, name))
    }

    pub fn allowlist(&self, name: &str) -> Result<&Allowlist, FormGuardError> {
        self.allowlists
            .get(name)
            .ok_or_else(|| FormGuardError::unknown(RuleKind::Allowlist, name))
    }

    pub fn pattern_names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    pub fn allowlist_names(&self) -> impl Iterator<Item = &str> {
        self.allowlists.keys().map(String::as_str)
    }

    pub fn patterns(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.values()
    }

    pub fn allowlists(&self) -> impl Iterator<Item = &Allowlist> {
        self.allowlists.values()
    }

    /// Validates `input` against the named pattern rule.
    ///
    /// Blank input is rejected before the rule is looked up, so an unknown
    /// rule name only errors for non-blank input.
    pub fn validate_pattern<'a>(
        &self,
        input: impl Into<Option<&'a str>>,
        rule_name: &str,
    ) -> Result<ValidationResult, FormGuardError> {
        let input = input.into();
        if let Some(rejected) = reject_blank(input) {
            return Ok(rejected);
        }
        Ok(self.pattern(rule_name)?.check(input))
    }

    /// Validates `input` against the named allowlist.
    pub fn validate_allowlist<'a>(
        &self,
        input: impl Into<Option<&'a str>>,
        field_name: &str,
    ) -> Result<ValidationResult, FormGuardError> {
        let input = input.into();
        if let Some(rejected) = reject_blank(input) {
            return Ok(rejected);
        }
        Ok(self.allowlist(field_name)?.check(input))
    }
}
