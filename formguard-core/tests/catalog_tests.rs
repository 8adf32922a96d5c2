// formguard-core/tests/catalog_tests.rs
use anyhow::Result;

use formguard_core::{AllowlistRule, FormGuardError, FormValidator, PatternRule, Registry, RuleCatalog};

#[test]
fn test_default_catalog_round_trips_into_registry() -> Result<()> {
    let catalog = RuleCatalog::load_default_rules()?;
    assert_eq!(catalog.patterns.len(), 7);
    assert_eq!(catalog.allowlists.len(), 4);

    let registry = Registry::from_catalog(catalog)?;
    assert_eq!(registry.patterns().count(), 7);
    assert!(registry.patterns().all(|p| p.description.is_some()));
    Ok(())
}

#[test]
fn test_form_validator_requires_its_rules() {
    let catalog = RuleCatalog {
        patterns: vec![PatternRule {
            name: "username".to_string(),
            pattern: "[a-z]+".to_string(),
            ..Default::default()
        }],
        allowlists: vec![AllowlistRule {
            name: "userRole".to_string(),
            description: None,
            values: vec!["USER".to_string()],
        }],
    };
    let registry = Registry::from_catalog(catalog).unwrap();

    match FormValidator::new(&registry) {
        Err(FormGuardError::UnknownRule { name, .. }) => assert_eq!(name, "email"),
        other => panic!("expected UnknownRule for email, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_broken_pattern_fails_registry_construction() {
    let catalog = RuleCatalog {
        patterns: vec![PatternRule {
            name: "broken".to_string(),
            pattern: "[a-z".to_string(),
            ..Default::default()
        }],
        allowlists: vec![],
    };
    let err = Registry::from_catalog(catalog).unwrap_err();
    assert!(matches!(err, FormGuardError::AnyhowWrapper(_)));
    assert!(err.to_string().contains("Rule 'broken' has an invalid regex pattern"));
}

#[test]
fn test_lowercase_allowlist_value_is_rejected() {
    let catalog = RuleCatalog {
        patterns: vec![],
        allowlists: vec![AllowlistRule {
            name: "userRole".to_string(),
            description: None,
            values: vec!["admin".to_string()],
        }],
    };
    let err = Registry::from_catalog(catalog).unwrap_err();
    assert!(matches!(err, FormGuardError::AnyhowWrapper(_)));
    assert!(err.to_string().contains("value 'admin' must be stored uppercase"));
}

#[test]
fn test_duplicate_rule_name_is_rejected() {
    let rule = PatternRule {
        name: "x".to_string(),
        pattern: "[a-z]+".to_string(),
        ..Default::default()
    };
    let catalog = RuleCatalog {
        patterns: vec![rule.clone(), rule],
        allowlists: vec![],
    };
    let err = Registry::from_catalog(catalog).unwrap_err();
    assert!(err.to_string().contains("Duplicate pattern rule name found: 'x'"));
}
