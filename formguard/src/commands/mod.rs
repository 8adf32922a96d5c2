//! Subcommand implementations.
//!
//! Each command writes to the given writer and returns whether the checked
//! input was valid, which `main` turns into the process exit status.

pub mod check;
pub mod demo;
pub mod form;
pub mod rules;
pub mod sanitize;
