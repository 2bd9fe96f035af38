//! List changed files and their groups

use anyhow::Context;
use log::info;

use super::{Outcome, emit};
use pipeline::adapters::GithubOutput;
use pipeline::core::models::ChangeQuery;
use pipeline::core::ports::VersionControl;
use pipeline::core::services::{ClassifierRegistry, classify, enumerate};
use pipeline::output::OutputMode;

/// Options for `changed list`
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    /// Plain or JSON
    pub output_mode: OutputMode,
    /// Add the groups column to plain output
    pub with_groups: bool,
    /// Also write slim JSON to `$GITHUB_OUTPUT`
    pub github_output: bool,
}

/// Enumerate, classify and print the changed files
pub fn changed_list(vcs: &dyn VersionControl, query: &ChangeQuery, opts: &ListOptions) -> anyhow::Result<Outcome> {
    let mode = query.mode()?;
    let sink = opts.github_output.then(GithubOutput::from_env).transpose()?;

    let files = enumerate(vcs, query).with_context(|| format!("listing changed files ({mode})"))?;
    let result = classify(&ClassifierRegistry::default(), files);
    info!("{} changed file(s) in groups [{}]", result.files.len(), result.groups);

    emit(&result.render(opts.output_mode, opts.with_groups)?);

    if let Some(sink) = sink {
        sink.write_json("list", &result.slim())
            .with_context(|| format!("writing {}", sink.path().display()))?;
    }

    Ok(Outcome::Clean)
}
