// formguard/src/cli.rs
//! Command-line interface definition for the `formguard` harness.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "formguard",
    author = "FormGuard Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate values against named rules and sanitize form submissions",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable all log output.
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Checks a value against a named pattern rule.
    #[command(about = "Check a value against a pattern rule (username, email, phone, date, password, url, zipcode).")]
    Pattern {
        /// Pattern rule name.
        rule: String,
        /// Value to check.
        input: String,
    },

    /// Checks a value against a named allowlist.
    #[command(about = "Check a value against an allowlist (countryCode, userRole, documentType, status).")]
    Allowlist {
        /// Allowlist field name.
        field: String,
        /// Value to check.
        input: String,
    },

    /// HTML-escapes free text.
    #[command(about = "HTML-escape free text (reads stdin when TEXT is omitted).")]
    Sanitize {
        /// Text to sanitize.
        text: Option<String>,
    },

    /// Validates a complete user form.
    #[command(about = "Validate a user form given as a YAML/JSON file and/or field flags.")]
    Form(FormCommand),

    /// Lists the built-in rules.
    #[command(about = "List the built-in pattern rules and allowlists.")]
    Rules,

    /// Runs the sample invocations.
    #[command(about = "Run the sample email, role and form validations.")]
    Demo,
}

/// Arguments for the `form` command. Flags override values from `--file`.
#[derive(Args, Debug, Default)]
pub struct FormCommand {
    /// YAML or JSON file holding a form (camelCase keys).
    #[arg(long, short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long = "birth-date", value_name = "YYYY-MM-DD")]
    pub birth_date: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Print the whole outcome as JSON.
    #[arg(long)]
    pub json: bool,
}
