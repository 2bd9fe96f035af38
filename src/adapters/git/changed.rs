//! Changed path detection
//!
//! Runs `git log`/`git show` in name-only mode and reads the paths back.
//! Path quoting is switched off so non-ASCII names come back verbatim.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::core::models::ChangeMode;
use crate::error::{Error, Result};

/// Options placed before the subcommand on every invocation
const GIT_OPTIONS: [&str; 2] = ["-c", "core.quotePath=false"];

/// Paths git reports as changed for `mode`, in the order git prints them
///
/// # Errors
///
/// Returns [`Error::VcsSpawn`] if git cannot be started and
/// [`Error::VcsFailed`] with the captured output if it exits unsuccessfully.
pub fn get_changed_paths(workdir: &Path, mode: &ChangeMode) -> Result<Vec<String>> {
    let args: Vec<&str> = GIT_OPTIONS.into_iter().chain(mode.git_args()).collect();
    let command = format!("git {}", args.join(" "));
    debug!("running `{command}` in {}", workdir.display());

    let output = Command::new("git")
        .args(&args)
        .current_dir(workdir)
        .output()
        .map_err(|source| Error::VcsSpawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(Error::VcsFailed {
            command,
            exit: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(parse_name_only(&String::from_utf8_lossy(&output.stdout)))
}

/// Split name-only output into paths, dropping empty lines
///
/// Lines are kept byte for byte, so names with leading or trailing spaces
/// survive.
#[must_use]
pub fn parse_name_only(stdout: &str) -> Vec<String> {
    stdout.lines().filter(|s| !s.is_empty()).map(String::from).collect()
}
