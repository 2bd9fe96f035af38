//! Error types for the change classification core
//!
//! Configuration errors are reported before any git process is spawned.
//! VCS errors carry the exact command together with its captured output.

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while enumerating, classifying, checking or rendering
#[derive(Debug, Error)]
pub enum Error {
    /// None of branch, range or commit was given
    #[error("one of branch, range, or commit is required")]
    NoModeSet,

    /// More than one of branch, range or commit was given
    #[error("only one of branch, range, or commit may be set, got {0}")]
    AmbiguousMode(String),

    /// A check was requested without any disallowed groups
    #[error("no disallowed groups have been configured")]
    NoDisallowedGroups,

    /// A group name that is not part of the group enumeration
    #[error("unknown group: {0}")]
    UnknownGroup(String),

    /// `--github-output` was requested but the runner did not provide a file
    #[error("GITHUB_OUTPUT environment variable is not set")]
    MissingGithubOutput,

    /// The git process could not be started
    #[error("failed to execute `{command}`: {source}")]
    VcsSpawn {
        /// Full command line
        command: String,
        /// Underlying spawn failure
        source: std::io::Error,
    },

    /// The git process exited unsuccessfully
    #[error(
        "`{command}` failed with exit code {}\nstdout: {stdout}\nstderr: {stderr}",
        .exit.map_or_else(|| "none".to_string(), |c| c.to_string())
    )]
    VcsFailed {
        /// Full command line
        command: String,
        /// Exit code, `None` when terminated by a signal
        exit: Option<i32>,
        /// Captured stdout
        stdout: String,
        /// Captured stderr
        stderr: String,
    },

    /// A result that must contain matches was empty
    #[error("uninitialized result: nothing to render")]
    UninitializedResult,

    /// JSON marshalling failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem failure while writing the CI side channel
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error stems from invalid input rather than execution
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::NoModeSet
                | Self::AmbiguousMode(_)
                | Self::NoDisallowedGroups
                | Self::UnknownGroup(_)
                | Self::MissingGithubOutput
        )
    }
}
