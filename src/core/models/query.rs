//! Which changes to enumerate
//!
//! A [`ChangeQuery`] carries the three mutually exclusive inputs as given on
//! the command line. [`ChangeQuery::mode`] validates it into a [`ChangeMode`].

use std::fmt;

use crate::error::{Error, Result};

/// Raw branch/range/commit inputs, at most one of which may be set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeQuery {
    /// Branch whose added files are wanted
    pub branch: Option<String>,
    /// Revision range `A..B`
    pub range: Option<String>,
    /// Single commit
    pub commit: Option<String>,
}

/// A validated enumeration mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeMode {
    /// Every file ever added on the branch
    Branch(String),
    /// Every file touched by commits in the range
    Range(String),
    /// Every file touched by the commit
    Commit(String),
}

impl ChangeQuery {
    /// Query a branch
    #[must_use]
    pub fn branch(branch: impl Into<String>) -> Self {
        Self {
            branch: Some(branch.into()),
            ..Self::default()
        }
    }

    /// Query a revision range
    #[must_use]
    pub fn range(range: impl Into<String>) -> Self {
        Self {
            range: Some(range.into()),
            ..Self::default()
        }
    }

    /// Query a single commit
    #[must_use]
    pub fn commit(commit: impl Into<String>) -> Self {
        Self {
            commit: Some(commit.into()),
            ..Self::default()
        }
    }

    /// Validate that exactly one input is set
    ///
    /// Empty strings count as unset.
    pub fn mode(&self) -> Result<ChangeMode> {
        let set: Vec<(&str, &str)> = [
            ("branch", self.branch.as_deref()),
            ("range", self.range.as_deref()),
            ("commit", self.commit.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.filter(|v| !v.is_empty()).map(|v| (name, v)))
        .collect();

        match set.as_slice() {
            [] => Err(Error::NoModeSet),
            [("branch", v)] => Ok(ChangeMode::Branch((*v).to_string())),
            [("range", v)] => Ok(ChangeMode::Range((*v).to_string())),
            [(_, v)] => Ok(ChangeMode::Commit((*v).to_string())),
            many => Err(Error::AmbiguousMode(
                many.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(", "),
            )),
        }
    }
}

impl ChangeMode {
    /// Arguments passed to `git` for this mode
    #[must_use]
    pub fn git_args(&self) -> Vec<&str> {
        match self {
            Self::Branch(branch) => vec!["log", branch.as_str(), "--pretty=", "--name-only", "--diff-filter=A"],
            Self::Range(range) => vec!["log", range.as_str(), "--pretty=", "--name-only"],
            Self::Commit(commit) => vec!["show", commit.as_str(), "--pretty=", "--name-only"],
        }
    }
}

impl fmt::Display for ChangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch(b) => write!(f, "branch {b}"),
            Self::Range(r) => write!(f, "range {r}"),
            Self::Commit(c) => write!(f, "commit {c}"),
        }
    }
}
