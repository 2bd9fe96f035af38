//! Output formatting for plain and JSON modes
//!
//! Results render either as machine-parseable JSON (full or slim) or as plain
//! text: a path per line, or a borderless table whose columns are separated by
//! a single space. Rendering returns strings; callers decide where they go.

use crate::core::models::{CheckResult, ListResult};
use crate::error::{Error, Result};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Plain text output (default)
    #[default]
    Plain,
    /// JSON output (machine-readable)
    Json,
}

impl ListResult {
    /// Render for stdout
    ///
    /// `with_groups` adds a groups column to plain output.
    pub fn render(&self, mode: OutputMode, with_groups: bool) -> Result<String> {
        match mode {
            OutputMode::Json => self.render_json(),
            OutputMode::Plain if with_groups => Ok(self.render_table()),
            OutputMode::Plain => Ok(self.render_plain()),
        }
    }

    /// Pretty JSON with full file records
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compact JSON with bare paths
    pub fn render_slim_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.slim())?)
    }

    /// One path per line
    #[must_use]
    pub fn render_plain(&self) -> String {
        self.files.paths().join("\n")
    }

    /// `PATH GROUPS` table
    #[must_use]
    pub fn render_table(&self) -> String {
        let rows = self.files.iter().map(|f| vec![f.path.clone(), f.groups.to_string()]).collect();
        format_table(&["PATH", "GROUPS"], rows)
    }
}

impl CheckResult {
    /// Render for stdout
    pub fn render(&self, mode: OutputMode) -> Result<String> {
        match mode {
            OutputMode::Json => self.render_json(),
            OutputMode::Plain if self.has_matches() => self.render_table(),
            OutputMode::Plain => Ok(format!(
                "No changed files in disallowed groups: {}",
                self.checked_groups
            )),
        }
    }

    /// Pretty JSON with full file records
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compact JSON with bare paths
    pub fn render_slim_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.slim())?)
    }

    /// `PATH GROUPS DISALLOWED GROUPS` table of matched files
    ///
    /// # Errors
    ///
    /// Returns [`Error::UninitializedResult`] when nothing matched.
    pub fn render_table(&self) -> Result<String> {
        if !self.has_matches() {
            return Err(Error::UninitializedResult);
        }
        let rows = self
            .matched_files
            .iter()
            .map(|f| {
                vec![
                    f.path.clone(),
                    f.groups.to_string(),
                    f.groups.intersection(&self.checked_groups).to_string(),
                ]
            })
            .collect();
        Ok(format_table(&["PATH", "GROUPS", "DISALLOWED GROUPS"], rows))
    }
}

/// Left-align columns, one space apart, without trailing whitespace
fn format_table(header: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = header.iter().map(|h| (*h).to_string()).collect();
    std::iter::once(header)
        .chain(rows)
        .map(|row: Vec<String>| {
            let mut line = String::new();
            for (cell, width) in row.iter().zip(widths.iter().copied()) {
                line.push_str(&format!("{cell:<width$} "));
            }
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
