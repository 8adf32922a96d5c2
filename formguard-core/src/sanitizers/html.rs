//! html.rs - HTML escaping of free text.
//!
//! The canonical entity set is fixed: `&amp;`, `&lt;`, `&gt;`, `&quot;` and
//! `&#39;`. Nothing else is rewritten, so non-ASCII text passes through
//! unchanged.
//!
//! License: MIT OR APACHE 2.0

use crate::validation_result::trim_input;

/// Escapes the five markup-significant characters.
///
/// `&` goes first so that entities produced by later replacements are not
/// escaped again.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Trims and escapes `input`; absent input becomes the empty string.
///
/// Not idempotent: running it twice escapes the `&` of every entity again.
pub fn sanitize<'a>(input: impl Into<Option<&'a str>>) -> String {
    match input.into() {
        Some(s) => escape_html(trim_input(s)),
        None => String::new(),
    }
}
