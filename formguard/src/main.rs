// formguard/src/main.rs
//! FormGuard entry point.
//!
//! Exit status: 0 when the checked input is valid, 1 when it is not, 2 when
//! the command itself failed (unknown rule name, unreadable file, ...).

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use formguard::cli::{Cli, Commands};
use formguard::commands::{check, demo, form, rules, sanitize};
use formguard::logger;
use formguard::ui::output::stdout_supports_color;

fn run(cli: Cli) -> Result<bool> {
    let color = stdout_supports_color();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Pattern { rule, input } => check::run_pattern(&mut out, &rule, &input, color),
        Commands::Allowlist { field, input } => check::run_allowlist(&mut out, &field, &input, color),
        Commands::Sanitize { text } => sanitize::run_sanitize(&mut out, text.as_deref(), io::stdin().lock()),
        Commands::Form(cmd) => form::run_form(&mut out, &cmd, color),
        Commands::Rules => rules::run_rules(&mut out),
        Commands::Demo => demo::run_demo(&mut out, color),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
