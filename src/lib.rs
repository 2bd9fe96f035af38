//! pipeline - classify the files changed in a repository into groups
//!
//! This library enumerates changed paths through git, assigns each path to
//! semantic groups (docs, proto, enterprise, ui, ...), and checks the result
//! against a set of disallowed groups for CI gating.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod core;
pub mod error;
pub mod output;

pub use error::{Error, Result};
