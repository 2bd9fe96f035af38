//! Enumerate the files changed in a repository
//!
//! Validates the query before touching version control, then normalizes the
//! paths the VCS reports into a sorted, duplicate-free [`ChangedFiles`].

use log::debug;

use crate::core::models::{ChangeQuery, ChangedFiles};
use crate::core::ports::VersionControl;
use crate::error::Result;

/// List the changed files selected by `query`
///
/// # Errors
///
/// Returns a configuration error when zero or several of branch, range and
/// commit are set, before `vcs` is consulted. VCS failures propagate as-is.
pub fn enumerate(vcs: &dyn VersionControl, query: &ChangeQuery) -> Result<ChangedFiles> {
    let mode = query.mode()?;
    let paths = vcs.changed_paths(&mode)?;
    let files = ChangedFiles::from_paths(paths);
    debug!("{mode}: {} changed file(s)", files.len());
    Ok(files)
}
