//! pipeline - CI helpers for classifying the files changed in a repository

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

use std::process::ExitCode;

use colored::Colorize;

/// Main entry point for the pipeline CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            if err.downcast_ref::<pipeline::Error>().is_some_and(pipeline::Error::is_config) {
                eprintln!("{} run `pipeline changed --help` for usage", "hint:".yellow().bold());
            }
            ExitCode::FAILURE
        },
    }
}
