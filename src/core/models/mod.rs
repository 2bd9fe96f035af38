//! Domain models for change classification
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Group`] / [`GroupSet`] - Labels and ordered sets of labels
//! - [`ChangedFile`] / [`ChangedFiles`] - Paths with their groups
//! - [`ChangeQuery`] / [`ChangeMode`] - Which changes to enumerate
//! - [`ListResult`] / [`CheckResult`] - What the commands report

mod file;
mod group;
mod query;
mod result;

pub use file::{ChangedFile, ChangedFiles};
pub use group::{Group, GroupSet};
pub use query::{ChangeMode, ChangeQuery};
pub use result::{CheckResult, ListResult, SlimCheckResult, SlimListResult};
