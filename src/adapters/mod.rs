//! Adapter implementations for port traits and outer I/O
//!
//! - `git/` - Changed path enumeration via the `git` binary
//! - `github_output` - The `GITHUB_OUTPUT` CI side channel

pub mod git;
pub mod github_output;

pub use git::GitVersionControl;
pub use github_output::GithubOutput;
