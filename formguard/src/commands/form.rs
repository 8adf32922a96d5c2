//! `form` command: builds a `UserForm` from a file and flags and validates it.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use formguard_core::{validate_form, UserForm};

use crate::cli::FormCommand;
use crate::ui::output::print_form_outcome;

/// Reads a form from a YAML or JSON document.
pub fn load_form(path: &Path) -> Result<UserForm> {
    info!("Loading form from: {}", path.display());
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file {}", path.display()))?;
    // JSON documents are valid YAML, so one parser covers both.
    let form: UserForm = serde_yml::from_str(&text)
        .with_context(|| format!("Failed to parse form file {}", path.display()))?;
    Ok(form)
}

/// Combines the optional file with per-field flags; flags win.
pub fn build_form(cmd: &FormCommand) -> Result<UserForm> {
    let mut form = match &cmd.file {
        Some(path) => load_form(path)?,
        None => UserForm::default(),
    };

    let overrides = [
        (&cmd.username, &mut form.username),
        (&cmd.email, &mut form.email),
        (&cmd.role, &mut form.role),
        (&cmd.birth_date, &mut form.birth_date),
        (&cmd.notes, &mut form.notes),
    ];
    for (flag, field) in overrides {
        if let Some(value) = flag {
            *field = value.clone();
        }
    }
    Ok(form)
}

pub fn run_form<W: Write>(writer: &mut W, cmd: &FormCommand, color: bool) -> Result<bool> {
    let form = build_form(cmd)?;
    let outcome = validate_form(&form);
    debug!("Form outcome: valid={}, errors={}", outcome.valid, outcome.errors.len());

    if cmd.json {
        serde_json::to_writer_pretty(&mut *writer, &outcome).context("Failed to serialize outcome")?;
        writeln!(writer)?;
    } else {
        print_form_outcome(writer, &outcome, color)?;
    }
    Ok(outcome.valid)
}
