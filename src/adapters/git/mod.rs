//! Git integration adapter
//!
//! Implements `VersionControl` by shelling out to the `git` binary.
//!
//! - [`changed`] - Changed path detection

pub mod changed;

use std::path::PathBuf;

use crate::core::models::ChangeMode;
use crate::core::ports::VersionControl;
use crate::error::Result;

pub use changed::{get_changed_paths, parse_name_only};

/// Git-based version control implementation
#[derive(Debug, Clone)]
pub struct GitVersionControl {
    /// Working directory
    workdir: PathBuf,
}

impl GitVersionControl {
    /// Create a new git version control adapter
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }

    /// Create a git adapter for the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

impl VersionControl for GitVersionControl {
    fn changed_paths(&self, mode: &ChangeMode) -> Result<Vec<String>> {
        get_changed_paths(&self.workdir, mode)
    }
}
