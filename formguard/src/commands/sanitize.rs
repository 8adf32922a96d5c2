//! `sanitize` command.

use std::io::{Read, Write};

use anyhow::{Context, Result};

use formguard_core::sanitize;

/// Sanitizes `text`, or everything readable from `stdin` when `text` is absent.
pub fn run_sanitize<W: Write, R: Read>(writer: &mut W, text: Option<&str>, mut stdin: R) -> Result<bool> {
    let sanitized = match text {
        Some(t) => sanitize(t),
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).context("Failed to read text from stdin")?;
            sanitize(buf.as_str())
        }
    };
    writeln!(writer, "{}", sanitized)?;
    Ok(true)
}
