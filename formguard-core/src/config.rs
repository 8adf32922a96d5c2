//! Rule catalog for `formguard-core`.
//!
//! This module defines the data structures for pattern rules and allowlists and
//! loads the built-in catalog that is embedded in the library at compile time.
//! The catalog is the single static mapping behind both registries; there is no
//! loader for user-supplied catalogs.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::validation_result::trim_input;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// A named regular-expression rule applied as a full-string match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PatternRule {
    /// Unique identifier for the rule (e.g., "username").
    pub name: String,
    /// Human-readable description of what the rule accepts.
    pub description: Option<String>,
    /// Pattern body. Anchored on both ends at compile time.
    pub pattern: String,
    /// Sub-patterns that must each be found somewhere in the input.
    pub requires: Vec<String>,
}

/// A named, finite set of accepted uppercase values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AllowlistRule {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<String>,
}

/// The complete set of rules backing the pattern and allowlist registries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RuleCatalog {
    pub patterns: Vec<PatternRule>,
    pub allowlists: Vec<AllowlistRule>,
}

impl RuleCatalog {
    /// Loads the built-in rule catalog from the embedded YAML document.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rule catalog from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let catalog = Self::from_yaml_str(default_yaml).context("Failed to parse default rules")?;

        debug!(
            "Loaded {} pattern rules and {} allowlists.",
            catalog.patterns.len(),
            catalog.allowlists.len()
        );
        Ok(catalog)
    }

    pub(crate) fn from_yaml_str(text: &str) -> Result<Self> {
        let catalog: RuleCatalog = serde_yml::from_str(text)?;
        validate_catalog(&catalog)?;
        Ok(catalog)
    }
}

/// Checks catalog integrity: unique non-empty names, usable patterns and
/// uppercase, duplicate-free allowlist values.
///
/// Every problem is collected so that a broken catalog is reported in one go.
pub fn validate_catalog(catalog: &RuleCatalog) -> Result<()> {
    let mut errors = Vec::new();

    let mut pattern_names = HashSet::new();
    for rule in &catalog.patterns {
        if rule.name.is_empty() {
            errors.push("A pattern rule has an empty `name` field.".to_string());
        } else if !pattern_names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate pattern rule name found: '{}'.", rule.name));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }
        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH
            ));
            continue;
        }
        for source in std::iter::once(&rule.pattern).chain(rule.requires.iter()) {
            if let Err(e) = Regex::new(source) {
                errors.push(format!(
                    "Rule '{}' has an invalid regex pattern '{}': {}",
                    rule.name, source, e
                ));
            }
        }
    }

    let mut allowlist_names = HashSet::new();
    for list in &catalog.allowlists {
        if list.name.is_empty() {
            errors.push("An allowlist has an empty `name` field.".to_string());
        } else if !allowlist_names.insert(list.name.as_str()) {
            errors.push(format!("Duplicate allowlist name found: '{}'.", list.name));
        }

        if list.values.is_empty() {
            errors.push(format!("Allowlist '{}' has no values.", list.name));
        }

        let mut seen = HashSet::new();
        for value in &list.values {
            if trim_input(value).is_empty() {
                errors.push(format!("Allowlist '{}' contains an empty value.", list.name));
            } else if *value != value.to_uppercase() {
                errors.push(format!(
                    "Allowlist '{}': value '{}' must be stored uppercase.",
                    list.name, value
                ));
            }
            if !seen.insert(value.as_str()) {
                errors.push(format!("Allowlist '{}': duplicate value '{}'.", list.name, value));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for e in &errors {
            warn!("Rejected catalog entry: {}", e);
        }
        Err(anyhow!("Rule catalog validation failed:\n{}", errors.join("\n")))
    }
}
