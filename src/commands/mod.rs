//! Command implementations

mod changed_check;
mod changed_list;

use std::process::ExitCode;

pub use changed_check::{CheckOptions, changed_check};
pub use changed_list::{ListOptions, changed_list};

/// How a successful command run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report
    Clean,
    /// A changed file fell into a disallowed group
    Violation,
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Clean => ExitCode::SUCCESS,
            Self::Violation => ExitCode::from(2),
        }
    }
}

/// Print rendered output, skipping empty renders
fn emit(rendered: &str) {
    if !rendered.is_empty() {
        println!("{rendered}");
    }
}
