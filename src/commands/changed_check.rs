//! Check changed files against disallowed groups

use anyhow::Context;
use log::{info, warn};

use super::{Outcome, emit};
use pipeline::Error;
use pipeline::adapters::GithubOutput;
use pipeline::core::models::{ChangeQuery, GroupSet};
use pipeline::core::ports::VersionControl;
use pipeline::core::services::{ClassifierRegistry, check, classify, enumerate};
use pipeline::output::OutputMode;

/// Options for `changed check`
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Plain or JSON
    pub output_mode: OutputMode,
    /// Disallowed group names as given on the command line
    pub disallowed: Vec<String>,
    /// Also write slim JSON to `$GITHUB_OUTPUT`
    pub github_output: bool,
}

/// Fail with [`Outcome::Violation`] if any changed file is in a disallowed group
pub fn changed_check(vcs: &dyn VersionControl, query: &ChangeQuery, opts: &CheckOptions) -> anyhow::Result<Outcome> {
    let disallowed = GroupSet::parse(&opts.disallowed)?;
    if disallowed.is_empty() {
        return Err(Error::NoDisallowedGroups.into());
    }
    let mode = query.mode()?;
    let sink = opts.github_output.then(GithubOutput::from_env).transpose()?;

    let files = enumerate(vcs, query).with_context(|| format!("checking changed files ({mode})"))?;
    let result = check(classify(&ClassifierRegistry::default(), files), disallowed)?;

    emit(&result.render(opts.output_mode)?);

    if let Some(sink) = sink {
        sink.write_json("check", &result.slim())
            .with_context(|| format!("writing {}", sink.path().display()))?;
    }

    if result.has_matches() {
        warn!(
            "{} changed file(s) in disallowed groups [{}]",
            result.matched_files.len(),
            result.matched_groups
        );
        return Ok(Outcome::Violation);
    }

    info!("no changed files in disallowed groups [{}]", result.checked_groups);
    Ok(Outcome::Clean)
}
