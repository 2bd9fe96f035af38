//! Groups and ordered group sets
//!
//! A [`Group`] is a coarse label for a changed file. A [`GroupSet`] keeps its
//! groups sorted by name and free of duplicates, so membership is a binary
//! search and the JSON form is stable across runs.
//!
//! # Examples
//!
//! ```
//! use pipeline::core::models::{Group, GroupSet};
//!
//! let mut set = GroupSet::new();
//! set.add(Group::Ui);
//! set.add(Group::App);
//! set.add(Group::Ui);
//! assert_eq!(set.to_string(), "app, ui");
//! assert!(set.contains(Group::App));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A semantic label for a changed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Source code in the repository's primary language
    App,
    /// Raft autopilot code
    Autopilot,
    /// Changelog entries
    Changelog,
    /// Community edition only code
    Community,
    /// Documentation
    Docs,
    /// Enos scenarios
    Enos,
    /// Enterprise only code
    Enterprise,
    /// GitHub configuration
    Github,
    /// Language toolchain manifests
    Gotoolchain,
    /// CI and release pipeline
    Pipeline,
    /// Protocol definitions
    Proto,
    /// Developer tools
    Tools,
    /// Web UI
    Ui,
}

impl Group {
    /// Every group, sorted by name
    pub const ALL: [Self; 13] = [
        Self::App,
        Self::Autopilot,
        Self::Changelog,
        Self::Community,
        Self::Docs,
        Self::Enos,
        Self::Enterprise,
        Self::Github,
        Self::Gotoolchain,
        Self::Pipeline,
        Self::Proto,
        Self::Tools,
        Self::Ui,
    ];

    /// The external name of the group
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Autopilot => "autopilot",
            Self::Changelog => "changelog",
            Self::Community => "community",
            Self::Docs => "docs",
            Self::Enos => "enos",
            Self::Enterprise => "enterprise",
            Self::Github => "github",
            Self::Gotoolchain => "gotoolchain",
            Self::Pipeline => "pipeline",
            Self::Proto => "proto",
            Self::Tools => "tools",
            Self::Ui => "ui",
        }
    }
}

// Groups order by name, independent of declaration order.
impl Ord for Group {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Group {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == name)
            .ok_or_else(|| Error::UnknownGroup(name.to_string()))
    }
}

/// A sorted, duplicate-free set of groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Group>", from = "Vec<Group>")]
pub struct GroupSet {
    groups: Vec<Group>,
}

impl GroupSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Parse a set from group names
    ///
    /// Blank names are skipped; unknown names are rejected.
    pub fn parse<I, S>(names: I) -> crate::error::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            set.add(name.parse()?);
        }
        Ok(set)
    }

    /// Insert a group at its sorted position; inserting twice is a no-op
    pub fn add(&mut self, group: Group) {
        if let Err(idx) = self.groups.binary_search(&group) {
            self.groups.insert(idx, group);
        }
    }

    /// Insert every group of `other`
    pub fn add_all(&mut self, other: &Self) {
        for group in &other.groups {
            self.add(*group);
        }
    }

    /// Whether `group` is a member
    #[must_use]
    pub fn contains(&self, group: Group) -> bool {
        self.groups.binary_search(&group).is_ok()
    }

    /// Whether every group of `other` is a member (true for an empty `other`)
    #[must_use]
    pub fn all(&self, other: &Self) -> bool {
        other.groups.iter().all(|g| self.contains(*g))
    }

    /// Whether at least one group of `other` is a member (false for an empty `other`)
    #[must_use]
    pub fn any(&self, other: &Self) -> bool {
        self.merge_walk(other).next().is_some()
    }

    /// The groups present in both sets
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            groups: self.merge_walk(other).collect(),
        }
    }

    /// The groups present in either set
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.add_all(other);
        out
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the set has no groups
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = Group> + '_ {
        self.groups.iter().copied()
    }

    /// The group names in ascending order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.groups.iter().map(|g| g.as_str()).collect()
    }

    // Both sides are sorted, so common elements fall out of a single pass.
    fn merge_walk<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = Group> + 'a {
        let mut left = self.groups.iter().peekable();
        let mut right = other.groups.iter().peekable();
        std::iter::from_fn(move || {
            loop {
                let (l, r) = (**left.peek()?, **right.peek()?);
                match l.cmp(&r) {
                    Ordering::Less => {
                        left.next();
                    },
                    Ordering::Greater => {
                        right.next();
                    },
                    Ordering::Equal => {
                        left.next();
                        right.next();
                        return Some(l);
                    },
                }
            }
        })
    }
}

impl fmt::Display for GroupSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}

impl From<Vec<Group>> for GroupSet {
    fn from(groups: Vec<Group>) -> Self {
        groups.into_iter().collect()
    }
}

impl From<GroupSet> for Vec<Group> {
    fn from(set: GroupSet) -> Self {
        set.groups
    }
}

impl<const N: usize> From<[Group; N]> for GroupSet {
    fn from(groups: [Group; N]) -> Self {
        groups.into_iter().collect()
    }
}

impl FromIterator<Group> for GroupSet {
    fn from_iter<T: IntoIterator<Item = Group>>(iter: T) -> Self {
        let mut set = Self::new();
        for group in iter {
            set.add(group);
        }
        set
    }
}

impl Extend<Group> for GroupSet {
    fn extend<T: IntoIterator<Item = Group>>(&mut self, iter: T) {
        for group in iter {
            self.add(group);
        }
    }
}

impl<'a> IntoIterator for &'a GroupSet {
    type Item = Group;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Group>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter().copied()
    }
}
