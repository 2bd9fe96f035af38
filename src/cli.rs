//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use crate::commands::{self, CheckOptions, ListOptions};
use pipeline::adapters::GitVersionControl;
use pipeline::core::models::ChangeQuery;
use pipeline::output::OutputMode;

/// pipeline - CI helpers for classifying changed files
#[derive(Parser, Debug)]
#[command(
    name = "pipeline",
    version,
    about = "CI helpers for classifying changed files",
    long_about = "Classify the files changed in a git repository into groups.\n\n\
                  `changed list` shows every changed file with its groups.\n\
                  `changed check` fails when a changed file falls into a disallowed group."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Repository checkout to inspect (defaults to the current directory)
    #[arg(short = 'C', long = "repo", global = true, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect the files changed in the repository
    Changed {
        #[command(subcommand)]
        action: ChangedAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChangedAction {
    /// List changed files and their groups
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Show each file's groups in plain output
        #[arg(long)]
        groups: bool,

        /// Also write slim JSON to the file named by $GITHUB_OUTPUT
        #[arg(long)]
        github_output: bool,
    },

    /// Fail if any changed file is in a disallowed group
    Check {
        #[command(flatten)]
        source: SourceArgs,

        /// Disallowed groups, comma separated
        #[arg(long, value_delimiter = ',', value_name = "GROUPS")]
        groups: Vec<String>,

        /// Also write slim JSON to the file named by $GITHUB_OUTPUT
        #[arg(long)]
        github_output: bool,
    },
}

/// Which changes to inspect; exactly one must be given
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Files added anywhere in the history of this branch
    #[arg(long)]
    pub branch: Option<String>,

    /// Files touched by the commits in a revision range (A..B)
    #[arg(long)]
    pub range: Option<String>,

    /// Files touched by a single commit
    #[arg(long)]
    pub commit: Option<String>,
}

impl From<SourceArgs> for ChangeQuery {
    fn from(args: SourceArgs) -> Self {
        Self {
            branch: args.branch,
            range: args.range,
            commit: args.commit,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    // Usage errors exit 1; exit code 2 is reserved for check violations.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            err.print()?;
            return Ok(code);
        },
    };

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Plain
    };

    let vcs = match cli.repo {
        Some(dir) => GitVersionControl::new(dir),
        None => GitVersionControl::current_dir()?,
    };

    let outcome = match cli.command {
        Command::Changed { action } => match action {
            ChangedAction::List {
                source,
                groups,
                github_output,
            } => commands::changed_list(
                &vcs,
                &source.into(),
                &ListOptions {
                    output_mode,
                    with_groups: groups,
                    github_output,
                },
            )?,
            ChangedAction::Check {
                source,
                groups,
                github_output,
            } => commands::changed_check(
                &vcs,
                &source.into(),
                &CheckOptions {
                    output_mode,
                    disallowed: groups,
                    github_output,
                },
            )?,
        },
    };

    Ok(outcome.exit_code())
}
