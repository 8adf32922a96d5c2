//! `pattern` and `allowlist` commands.

use std::io::Write;

use anyhow::{Context, Result};
use log::info;

use formguard_core::{validate_allowlist, validate_pattern};

use crate::ui::output::print_result;

pub fn run_pattern<W: Write>(writer: &mut W, rule: &str, input: &str, color: bool) -> Result<bool> {
    info!("Checking input against pattern rule '{}'.", rule);
    let result = validate_pattern(input, rule).with_context(|| format!("Cannot check pattern '{}'", rule))?;
    print_result(writer, rule, &result, color)?;
    Ok(result.valid)
}

pub fn run_allowlist<W: Write>(writer: &mut W, field: &str, input: &str, color: bool) -> Result<bool> {
    info!("Checking input against allowlist '{}'.", field);
    let result =
        validate_allowlist(input, field).with_context(|| format!("Cannot check allowlist '{}'", field))?;
    print_result(writer, field, &result, color)?;
    Ok(result.valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_rule_propagates() {
        let mut buf = Vec::new();
        let err = run_pattern(&mut buf, "ssn", "123-45-6789", false).unwrap_err();
        assert_eq!(format!("{:#}", err), "Cannot check pattern 'ssn': Unknown pattern rule 'ssn'");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_allowlist_verdict() -> Result<()> {
        let mut buf = Vec::new();
        assert!(run_allowlist(&mut buf, "status", "pending", false)?);
        assert!(!run_allowlist(&mut buf, "status", "deleted", false)?);
        assert_eq!(
            String::from_utf8(buf)?,
            "status: Valid input\nstatus: Value not allowed for status\n"
        );
        Ok(())
    }
}
