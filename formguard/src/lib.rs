// formguard/src/lib.rs
//! # FormGuard CLI
//!
//! A thin command-line harness over `formguard-core`. All validation
//! decisions live in the core crate; this crate parses arguments, reads
//! forms from disk and prints verdicts.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
