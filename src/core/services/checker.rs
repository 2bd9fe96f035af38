//! Change classifier - drives classification and disallowed-group checks
//!
//! Pure business logic with no I/O: files in, results out.

use log::debug;

use super::ClassifierRegistry;
use crate::core::models::{ChangedFiles, CheckResult, GroupSet, ListResult};
use crate::error::{Error, Result};

/// Classify every file and collect the union of their groups
///
/// File order is preserved; groups are only ever added.
#[must_use]
pub fn classify(registry: &ClassifierRegistry, mut files: ChangedFiles) -> ListResult {
    for file in files.iter_mut() {
        file.groups.add_all(&registry.classify_path(&file.path));
        debug!("{}: [{}]", file.path, file.groups);
    }
    let groups = files.groups();
    ListResult { files, groups }
}

/// Check a classification against disallowed groups
///
/// # Errors
///
/// Returns [`Error::NoDisallowedGroups`] when `disallowed` is empty.
pub fn check(result: ListResult, disallowed: GroupSet) -> Result<CheckResult> {
    if disallowed.is_empty() {
        return Err(Error::NoDisallowedGroups);
    }

    let matched_files = result.files.filter_any(&disallowed);
    let matched_groups = result.groups.intersection(&disallowed);

    Ok(CheckResult {
        changed_files: result.files,
        changed_groups: result.groups,
        checked_groups: disallowed,
        matched_files,
        matched_groups,
    })
}
