//! Keeps raw form input out of debug logs unless explicitly allowed.

use lazy_static::lazy_static;

lazy_static! {
    /// Read once: whether raw input values may appear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("FORMGUARD_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_CHARS: usize = 8;
    let chars = s.chars().count();
    if chars <= MAX_CHARS {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", chars)
    }
}

/// The form of `input` that may be written to a log line.
pub fn loggable(input: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        input.to_string()
    } else {
        redact_sensitive(input)
    }
}
