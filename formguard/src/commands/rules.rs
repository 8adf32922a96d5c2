//! `rules` command.

use std::io::Write;

use anyhow::Result;

use formguard_core::Registry;

use crate::ui::output::print_rules;

pub fn run_rules<W: Write>(writer: &mut W) -> Result<bool> {
    print_rules(writer, Registry::global())?;
    Ok(true)
}
