//! compiler.rs - Turns catalog `PatternRule`s into ready-to-match regexes.
//!
//! Each rule body is wrapped as `^(?:body)$` so that matching always consumes
//! the whole input. `requires` sub-patterns are compiled unanchored and must
//! each find a match; together they stand in for lookahead assertions.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::{PatternRule, MAX_PATTERN_LENGTH};
use crate::errors::FormGuardError;

const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A single compiled pattern rule.
#[derive(Debug)]
pub struct CompiledPattern {
    /// The unique name of the rule.
    pub name: String,
    pub description: Option<String>,
    /// Anchored full-string matcher.
    pub regex: Regex,
    /// Unanchored constraints, all of which must be found in the input.
    pub requires: Vec<Regex>,
}

impl CompiledPattern {
    /// True when the whole input matches and every requirement is present.
    pub fn is_full_match(&self, input: &str) -> bool {
        self.regex.is_match(input) && self.requires.iter().all(|r| r.is_match(input))
    }
}

/// All compiled pattern rules, in catalog order.
#[derive(Debug)]
pub struct CompiledPatterns {
    pub rules: Vec<CompiledPattern>,
}

fn build(rule_name: &str, source: &str) -> Result<Regex, FormGuardError> {
    RegexBuilder::new(source)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| FormGuardError::RuleCompilationError(rule_name.to_string(), e))
}

fn compile_one(rule: PatternRule) -> Result<CompiledPattern, FormGuardError> {
    if rule.pattern.len() > MAX_PATTERN_LENGTH {
        return Err(FormGuardError::PatternLengthExceeded(
            rule.name,
            rule.pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    let regex = build(&rule.name, &format!("^(?:{})$", rule.pattern))?;
    let requires = rule
        .requires
        .iter()
        .map(|source| build(&rule.name, source))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompiledPattern {
        name: rule.name,
        description: rule.description,
        regex,
        requires,
    })
}

/// Compiles a list of `PatternRule`s.
///
/// Compilation carries on past a failing rule so that the returned error
/// lists every broken rule at once.
pub fn compile_patterns(rules: Vec<PatternRule>) -> Result<CompiledPatterns, FormGuardError> {
    debug!("Starting compilation of {} pattern rules.", rules.len());

    let mut compiled = Vec::with_capacity(rules.len());
    let mut compilation_errors = Vec::new();

    for rule in rules {
        let name = rule.name.clone();
        match compile_one(rule) {
            Ok(c) => {
                log::debug!(
                    target: "formguard_core::compiler",
                    "Rule '{}' compiled successfully.",
                    name
                );
                compiled.push(c);
            }
            Err(e) => compilation_errors.push(e),
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(FormGuardError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    debug!("Finished compiling rules. Total compiled: {}.", compiled.len());
    Ok(CompiledPatterns { rules: compiled })
}
