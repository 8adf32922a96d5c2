// formguard-core/tests/registry_tests.rs
use anyhow::Result;

use formguard_core::{validate_allowlist, validate_pattern, FormGuardError, Registry, RuleKind, ValidationResult};

const PATTERN_RULES: [&str; 7] = ["username", "email", "phone", "date", "password", "url", "zipcode"];
const ALLOWLIST_FIELDS: [&str; 4] = ["countryCode", "userRole", "documentType", "status"];

fn assert_pattern(rule: &str, accepted: &[&str], rejected: &[&str]) -> Result<()> {
    for input in accepted {
        let result = validate_pattern(*input, rule)?;
        assert!(result.valid, "{} should accept {:?}: {:?}", rule, input, result);
        assert_eq!(result.message, "Valid input");
    }
    for input in rejected {
        let result = validate_pattern(*input, rule)?;
        assert!(!result.valid, "{} should reject {:?}", rule, input);
        assert_eq!(result.message, format!("Invalid format for {}", rule));
    }
    Ok(())
}

#[test]
fn test_empty_and_absent_input_for_every_pattern_rule() -> Result<()> {
    for rule in PATTERN_RULES {
        assert_eq!(validate_pattern("", rule)?, ValidationResult::empty_input());
        assert_eq!(validate_pattern(None, rule)?, ValidationResult::empty_input());
        assert_eq!(validate_pattern(" \t ", rule)?.message, "Input cannot be empty");
    }
    Ok(())
}

#[test]
fn test_empty_and_absent_input_for_every_allowlist() -> Result<()> {
    for field in ALLOWLIST_FIELDS {
        assert_eq!(validate_allowlist("", field)?, ValidationResult::empty_input());
        assert_eq!(validate_allowlist(None, field)?, ValidationResult::empty_input());
    }
    Ok(())
}

#[test]
fn test_unknown_pattern_rule_is_an_error_not_a_verdict() {
    for input in ["x", "john_doe", "test@example.com"] {
        match validate_pattern(input, "unknown-rule") {
            Err(FormGuardError::UnknownRule { kind, name }) => {
                assert_eq!(kind, RuleKind::Pattern);
                assert_eq!(name, "unknown-rule");
            }
            other => panic!("expected UnknownRule, got {:?}", other),
        }
    }
}

#[test]
fn test_unknown_allowlist_field_is_an_error() {
    let err = validate_allowlist("USD", "currency").unwrap_err();
    assert!(err.is_unknown_rule());
    assert_eq!(err.to_string(), "Unknown allowlist field 'currency'");
}

#[test]
fn test_allowlist_names_are_not_pattern_rules() {
    assert!(validate_pattern("ADMIN", "userRole").unwrap_err().is_unknown_rule());
    assert!(validate_allowlist("john_doe", "username").unwrap_err().is_unknown_rule());
}

#[test]
fn test_username_rule() -> Result<()> {
    assert_pattern(
        "username",
        &["john_doe", "abc", "A1_", "a".repeat(20).as_str()],
        &["jo", "a".repeat(21).as_str(), "john-doe", "john doe", "jöhn", "john_doe "],
    )
}

#[test]
fn test_email_rule() -> Result<()> {
    assert_pattern(
        "email",
        &["test@example.com", "a@b", "first.last+tag@sub.example.org", "a@b@c"],
        &["not-an-email", "@example.com", "user name@example.com", "test@"],
    )
}

#[test]
fn test_phone_rule() -> Result<()> {
    assert_pattern(
        "phone",
        &["+14155552671", "12", "123456789012345", "+442071838750"],
        &["1", "0123456", "1234567890123456", "++1234", "415-555-2671"],
    )
}

#[test]
fn test_date_rule_is_syntactic_only() -> Result<()> {
    assert_pattern(
        "date",
        &["1990-01-01", "2021-02-30", "9999-99-99"],
        &["2021-2-3", "01-01-1990", "1990/01/01", "1990-01-01T00:00", "١٩٩٠-01-01"],
    )
}

#[test]
fn test_password_rule_needs_letter_and_digit_in_any_order() -> Result<()> {
    assert_pattern(
        "password",
        &["passw0rd", "0password", "12345a78", "0Abc!@#$", "Secr3t?&%*"],
        &["password", "12345678", "p4ss", "pass w0rd", "passw0rd^"],
    )
}

#[test]
fn test_url_rule() -> Result<()> {
    assert_pattern(
        "url",
        &[
            "https://www.example.com",
            "http://example.com/",
            "example.co.uk",
            "example.com/path/to page",
            "my-site.io/a_b.c-d/",
        ],
        &["http://Example.com", "ftp://example.com", "localhost", "example.c", "https://example.com?q=1"],
    )
}

#[test]
fn test_zipcode_rule() -> Result<()> {
    assert_pattern(
        "zipcode",
        &["12345", "12345-6789"],
        &["1234", "123456", "12345-678", "12345 6789", "ABCDE"],
    )
}

#[test]
fn test_allowlist_membership_is_case_insensitive() -> Result<()> {
    assert!(validate_allowlist("admin", "userRole")?.valid);
    assert!(validate_allowlist(" Guest ", "userRole")?.valid);
    assert!(validate_allowlist("us", "countryCode")?.valid);
    assert!(validate_allowlist("docx", "documentType")?.valid);
    assert!(validate_allowlist("Suspended", "status")?.valid);

    let rejected = validate_allowlist("SUPERUSER", "userRole")?;
    assert_eq!(rejected, ValidationResult::invalid("Value not allowed for userRole"));
    assert_eq!(
        validate_allowlist("MX", "countryCode")?.message,
        "Value not allowed for countryCode"
    );
    Ok(())
}

#[test]
fn test_allowlist_values_are_fixed() -> Result<()> {
    let registry = Registry::load_default()?;
    let roles: Vec<&str> = registry.allowlist("userRole")?.values().collect();
    assert_eq!(roles, vec!["ADMIN", "GUEST", "MANAGER", "USER"]);
    let countries = registry.allowlist("countryCode")?.values().count();
    assert_eq!(countries, 9);
    Ok(())
}

#[test]
fn test_global_registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let name = format!("user_{}", i);
                validate_pattern(name.as_str(), "username").map(|r| r.valid)
            })
        })
        .collect();
    for handle in handles {
        assert!(matches!(handle.join(), Ok(Ok(true))));
    }
}
