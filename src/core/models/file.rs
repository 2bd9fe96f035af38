//! Changed files and ordered lists of them

use serde::{Deserialize, Serialize};

use super::GroupSet;

/// A repository-relative path together with the groups it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Path relative to the repository root, `/` separated
    #[serde(rename = "file")]
    pub path: String,
    /// Groups assigned by classification
    pub groups: GroupSet,
}

impl ChangedFile {
    /// Create an unclassified file
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            groups: GroupSet::new(),
        }
    }
}

/// Changed files ordered by path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangedFiles(Vec<ChangedFile>);

impl ChangedFiles {
    /// Build an unclassified list from raw paths
    ///
    /// Empty entries are dropped, a leading `./` is stripped, and the
    /// result is sorted and de-duplicated.
    #[must_use]
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut paths: Vec<String> = paths
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                p.strip_prefix("./").unwrap_or(p).to_string()
            })
            .filter(|p| !p.is_empty())
            .collect();
        paths.sort_unstable();
        paths.dedup();
        Self(paths.into_iter().map(ChangedFile::new).collect())
    }

    /// Number of files
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no files
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in path order
    pub fn iter(&self) -> std::slice::Iter<'_, ChangedFile> {
        self.0.iter()
    }

    /// Iterate mutably in path order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ChangedFile> {
        self.0.iter_mut()
    }

    /// The paths in order
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.0.iter().map(|f| f.path.as_str()).collect()
    }

    /// Union of the groups of every file
    #[must_use]
    pub fn groups(&self) -> GroupSet {
        let mut groups = GroupSet::new();
        for file in &self.0 {
            groups.add_all(&file.groups);
        }
        groups
    }

    /// Whether every file belongs to at least one of `groups`
    ///
    /// An empty list never qualifies.
    #[must_use]
    pub fn each_has_any_group(&self, groups: &GroupSet) -> bool {
        !self.0.is_empty() && self.0.iter().all(|f| f.groups.any(groups))
    }

    /// Files that belong to at least one of `groups`, in order
    #[must_use]
    pub fn filter_any(&self, groups: &GroupSet) -> Self {
        self.0.iter().filter(|f| f.groups.any(groups)).cloned().collect()
    }

    /// Files that belong to none of `groups`, in order
    #[must_use]
    pub fn without_any(&self, groups: &GroupSet) -> Self {
        self.0.iter().filter(|f| !f.groups.any(groups)).cloned().collect()
    }
}

impl FromIterator<ChangedFile> for ChangedFiles {
    fn from_iter<T: IntoIterator<Item = ChangedFile>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ChangedFiles {
    type Item = &'a ChangedFile;
    type IntoIter = std::slice::Iter<'a, ChangedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ChangedFiles {
    type Item = ChangedFile;
    type IntoIter = std::vec::IntoIter<ChangedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
