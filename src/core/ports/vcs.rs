//! Version control system port
//!
//! Defines the interface for asking version control which paths changed.

use crate::core::models::ChangeMode;
use crate::error::Result;

/// Version control system abstraction
///
/// Implementations return raw, repository-relative paths as the VCS prints
/// them. Sorting and de-duplication happen in the enumerator.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl {
    /// Paths changed according to `mode`
    fn changed_paths(&self, mode: &ChangeMode) -> Result<Vec<String>>;
}
