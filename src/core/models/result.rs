//! Classification and check results
//!
//! Full results serialize every file with its groups. The slim views replace
//! file records with bare paths for the CI side channel.

use serde::{Deserialize, Serialize};

use super::{ChangedFiles, GroupSet};

/// Every changed file with its groups, plus the union of those groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResult {
    /// Classified files in path order
    pub files: ChangedFiles,
    /// Union of all file groups
    pub groups: GroupSet,
}

/// Outcome of checking changed files against disallowed groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Classified files in path order
    pub changed_files: ChangedFiles,
    /// Union of all file groups
    pub changed_groups: GroupSet,
    /// Disallowed groups supplied by the caller
    pub checked_groups: GroupSet,
    /// Files with at least one disallowed group, in path order
    pub matched_files: ChangedFiles,
    /// `changed_groups` intersected with `checked_groups`
    pub matched_groups: GroupSet,
}

impl CheckResult {
    /// Whether any changed file fell into a disallowed group
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.matched_files.is_empty()
    }
}

/// [`ListResult`] with paths in place of file records
#[derive(Debug, Serialize)]
pub struct SlimListResult<'a> {
    /// Changed paths
    pub files: Vec<&'a str>,
    /// Union of all file groups
    pub groups: &'a GroupSet,
}

/// [`CheckResult`] with paths in place of file records
#[derive(Debug, Serialize)]
pub struct SlimCheckResult<'a> {
    /// Changed paths
    pub changed_files: Vec<&'a str>,
    /// Union of all file groups
    pub changed_groups: &'a GroupSet,
    /// Disallowed groups
    pub checked_groups: &'a GroupSet,
    /// Paths with at least one disallowed group
    pub matched_files: Vec<&'a str>,
    /// Disallowed groups that were changed
    pub matched_groups: &'a GroupSet,
}

impl ListResult {
    /// Borrow as the slim form
    #[must_use]
    pub fn slim(&self) -> SlimListResult<'_> {
        SlimListResult {
            files: self.files.paths(),
            groups: &self.groups,
        }
    }
}

impl CheckResult {
    /// Borrow as the slim form
    #[must_use]
    pub fn slim(&self) -> SlimCheckResult<'_> {
        SlimCheckResult {
            changed_files: self.changed_files.paths(),
            changed_groups: &self.changed_groups,
            checked_groups: &self.checked_groups,
            matched_files: self.matched_files.paths(),
            matched_groups: &self.matched_groups,
        }
    }
}
