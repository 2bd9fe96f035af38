//! Business logic services
//!
//! - [`enumerator`] - Ask version control which files changed
//! - [`classifier`] - Rules that assign groups to paths
//! - [`checker`] - Classify changed files and check disallowed groups

pub mod checker;
pub mod classifier;
pub mod enumerator;

pub use checker::{check, classify};
pub use classifier::{Classifier, ClassifierRegistry};
pub use enumerator::enumerate;
