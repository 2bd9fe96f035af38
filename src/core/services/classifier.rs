//! Classifier registry - assigns groups to paths
//!
//! A classifier is a pure function from a repository-relative path to the
//! groups it implies. The registry runs every classifier on a path and merges
//! the results, so adding a rule never touches the pipeline driving it.
//!
//! # Examples
//!
//! ```
//! use pipeline::core::services::ClassifierRegistry;
//!
//! let registry = ClassifierRegistry::default();
//! assert_eq!(registry.classify_path("vault/acl_ent.go").to_string(), "app, enterprise");
//! assert_eq!(registry.classify_path(".github/CODEOWNERS").to_string(), "github, pipeline");
//! ```

use std::fmt;

use crate::core::models::{Group, GroupSet};

/// A single classification rule
pub type Classifier = Box<dyn Fn(&str) -> GroupSet + Send + Sync>;

/// An ordered list of named classifiers
pub struct ClassifierRegistry {
    classifiers: Vec<(&'static str, Classifier)>,
}

impl ClassifierRegistry {
    /// A registry with no classifiers
    #[must_use]
    pub fn empty() -> Self {
        Self {
            classifiers: Vec::new(),
        }
    }

    /// Append a classifier
    #[must_use]
    pub fn with<F>(mut self, name: &'static str, classifier: F) -> Self
    where
        F: Fn(&str) -> GroupSet + Send + Sync + 'static,
    {
        self.register(name, classifier);
        self
    }

    /// Append a classifier in place
    pub fn register<F>(&mut self, name: &'static str, classifier: F)
    where
        F: Fn(&str) -> GroupSet + Send + Sync + 'static,
    {
        self.classifiers.push((name, Box::new(classifier)));
    }

    /// Names of the registered classifiers, in order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.classifiers.iter().map(|(name, _)| *name).collect()
    }

    /// Run every classifier on `path` and merge the results
    #[must_use]
    pub fn classify_path(&self, path: &str) -> GroupSet {
        let mut groups = GroupSet::new();
        for (_, classifier) in &self.classifiers {
            groups.add_all(&classifier(path));
        }
        groups
    }
}

impl Default for ClassifierRegistry {
    fn default() -> Self {
        Self::empty()
            .with("dir", classify_dir)
            .with("filename", classify_filename)
            .with("go", classify_go)
            .with("proto", classify_proto)
    }
}

impl fmt::Debug for ClassifierRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierRegistry").field("classifiers", &self.names()).finish()
    }
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Groups implied by the top-level directory
#[must_use]
pub fn classify_dir(path: &str) -> GroupSet {
    let Some((top, rest)) = path.split_once('/') else {
        return GroupSet::new();
    };

    match top {
        ".github" => GroupSet::from([Group::Github, Group::Pipeline]),
        ".build" | ".release" | "scripts" => GroupSet::from([Group::Pipeline]),
        "changelog" => GroupSet::from([Group::Changelog]),
        "enos" => GroupSet::from([Group::Enos]),
        "tools" if rest.starts_with("pipeline/") => GroupSet::from([Group::Pipeline]),
        "tools" => GroupSet::from([Group::Tools]),
        "ui" => GroupSet::from([Group::Ui]),
        "website" => GroupSet::from([Group::Docs]),
        _ => GroupSet::new(),
    }
}

/// Groups implied by the file name alone
#[must_use]
pub fn classify_filename(path: &str) -> GroupSet {
    let name = basename(path);
    let mut groups = GroupSet::new();

    if name.starts_with("buf.") {
        groups.add(Group::Proto);
    }
    if name.starts_with("CHANGELOG") {
        groups.add(Group::Changelog);
    }
    if name.starts_with("CODEOWNERS") || name.starts_with("Dockerfile") || name.starts_with("Makefile") {
        groups.add(Group::Pipeline);
    }
    if name.starts_with("README") {
        groups.add(Group::Docs);
    }
    if name.ends_with("go.mod") || name.ends_with("go.sum") {
        groups.add(Group::App);
        groups.add(Group::Gotoolchain);
    }

    let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    if stem.ends_with("-ent") || stem.ends_with("_ent") {
        groups.add(Group::Enterprise);
    }

    groups
}

/// Groups for Go source files
#[must_use]
pub fn classify_go(path: &str) -> GroupSet {
    let mut groups = GroupSet::new();
    if !path.ends_with(".go") {
        return groups;
    }

    groups.add(Group::App);
    if basename(path).contains("raft_autopilot") {
        groups.add(Group::Autopilot);
    }
    if path.ends_with("_ent.go") {
        groups.add(Group::Enterprise);
    }
    if path.ends_with("_oss.go") || path.ends_with("_ce.go") {
        groups.add(Group::Community);
    }
    if path.starts_with("tools/pipeline") {
        groups.add(Group::Pipeline);
    }
    groups
}

/// Groups for protocol definitions
#[must_use]
pub fn classify_proto(path: &str) -> GroupSet {
    if path.ends_with(".proto") {
        GroupSet::from([Group::Proto])
    } else {
        GroupSet::new()
    }
}
