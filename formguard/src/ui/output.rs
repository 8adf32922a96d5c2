// formguard/src/ui/output.rs
//! Writes verdicts and listings to the console.
//!
//! Colour is only used when the destination is a terminal, so piped output
//! and test captures stay plain.

use std::io::{self, Write};

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use formguard_core::{FormValidationOutcome, Registry, ValidationResult};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Whether stdout should receive ANSI colour codes.
pub fn stdout_supports_color() -> bool {
    io::stdout().is_terminal()
}

/// Prints a single-rule verdict as `<label>: <message>`.
pub fn print_result<W: Write>(
    writer: &mut W,
    label: &str,
    result: &ValidationResult,
    color: bool,
) -> Result<()> {
    if !color {
        writeln!(writer, "{}: {}", label, result.message)?;
    } else if result.valid {
        writeln!(writer, "{}: {}", label, result.message.green())?;
    } else {
        writeln!(writer, "{}: {}", label, result.message.red())?;
    }
    Ok(())
}

/// Prints a form verdict: the sanitized notes when valid, every error otherwise.
pub fn print_form_outcome<W: Write>(
    writer: &mut W,
    outcome: &FormValidationOutcome,
    color: bool,
) -> Result<()> {
    if outcome.valid {
        if color {
            writeln!(writer, "{}", "Form is valid!".green().bold())?;
        } else {
            writeln!(writer, "Form is valid!")?;
        }
        writeln!(writer, "Sanitized notes: {}", outcome.sanitized_form.notes)?;
    } else {
        if color {
            writeln!(writer, "{}", "Form validation errors:".red().bold())?;
        } else {
            writeln!(writer, "Form validation errors:")?;
        }
        for error in &outcome.errors {
            writeln!(writer, "{}", error)?;
        }
    }
    Ok(())
}

/// Renders the registry contents as two tables.
pub fn print_rules<W: Write>(writer: &mut W, registry: &Registry) -> Result<()> {
    let mut patterns = Table::new();
    patterns
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Pattern rule", "Accepts"]);
    for rule in registry.patterns() {
        patterns.add_row(vec![
            rule.name.clone(),
            rule.description.clone().unwrap_or_default(),
        ]);
    }

    let mut allowlists = Table::new();
    allowlists
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Allowlist field", "Values"]);
    for list in registry.allowlists() {
        allowlists.add_row(vec![list.name.clone(), list.values().collect::<Vec<_>>().join(", ")]);
    }

    writeln!(writer, "{}", patterns)?;
    writeln!(writer, "{}", allowlists)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use formguard_core::{validate_form, UserForm};

    #[test]
    fn test_print_result_plain() -> Result<()> {
        let mut buf = Vec::new();
        print_result(&mut buf, "Email validation", &ValidationResult::valid(), false)?;
        assert_eq!(String::from_utf8(buf)?, "Email validation: Valid input\n");
        Ok(())
    }

    #[test]
    fn test_print_invalid_form_lists_errors() -> Result<()> {
        let outcome = validate_form(&UserForm::new("jo", "john@example.com", "USER", "1990-01-01", ""));
        let mut buf = Vec::new();
        print_form_outcome(&mut buf, &outcome, false)?;
        assert_eq!(
            String::from_utf8(buf)?,
            "Form validation errors:\nUsername: Invalid format for username\n"
        );
        Ok(())
    }
}
