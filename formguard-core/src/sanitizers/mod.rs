//! Text sanitizers applied to free-text form fields.
//!
//! Sanitization never rejects input; it rewrites it so that it can be
//! embedded in an HTML document later without being interpreted as markup.

pub mod html;

pub use html::{escape_html, sanitize};
