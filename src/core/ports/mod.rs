//! Port traits (interfaces) for external dependencies
//!
//! The core depends only on these traits. Implementations live in the
//! `adapters` module, and tests substitute mocks.

mod vcs;

pub use vcs::VersionControl;

#[cfg(test)]
pub(crate) use vcs::MockVersionControl;
