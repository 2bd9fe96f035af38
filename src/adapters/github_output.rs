//! GitHub Actions output side channel
//!
//! Appends `key=value` lines to the file named by `GITHUB_OUTPUT`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};

/// Environment variable naming the output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Writer for the GitHub Actions output file
#[derive(Debug, Clone)]
pub struct GithubOutput {
    path: PathBuf,
}

impl GithubOutput {
    /// Write to an explicit file
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Write to the file named by `GITHUB_OUTPUT`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingGithubOutput`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        std::env::var_os(GITHUB_OUTPUT_ENV)
            .filter(|v| !v.is_empty())
            .map(|v| Self::new(PathBuf::from(v)))
            .ok_or(Error::MissingGithubOutput)
    }

    /// The output file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `key=<compact json of value>` as one line
    pub fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{key}={json}")?;
        debug!("wrote {key} to {}", self.path.display());
        Ok(())
    }
}
