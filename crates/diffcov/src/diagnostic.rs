//! reviewdog diagnostics (rdjsonl) for uncovered lines.

use crate::report::CoverageReport;
use crate::result::DiffcovResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Message attached to every uncovered-line diagnostic
pub const UNCOVERED_LINE_MESSAGE: &str = "Line not covered by tests";

/// reviewdog diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Blocking issue
    Error,
    /// Non-blocking issue
    #[default]
    Warning,
    /// Informational note
    Info,
}

/// Line position within a file (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Line number
    pub line: u64,
}

/// Span of a diagnostic; only the start is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// First line of the span
    pub start: Position,
}

/// Where a diagnostic points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Source file path, as recorded in the coverage report
    pub path: String,
    /// Affected lines
    pub range: Range,
}

/// One reviewdog diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// Affected file and line
    pub location: Location,
    /// Severity shown in review annotations
    pub severity: Severity,
}

impl Diagnostic {
    /// Warning for a line not exercised by any test
    #[must_use]
    pub fn uncovered_line(path: impl Into<String>, line: u64) -> Self {
        Self {
            message: UNCOVERED_LINE_MESSAGE.to_string(),
            location: Location {
                path: path.into(),
                range: Range {
                    start: Position { line },
                },
            },
            severity: Severity::Warning,
        }
    }
}

/// One diagnostic per violation line, in report order
///
/// Files are visited in `src_stats` order and lines in `violation_lines`
/// order. Nothing is sorted or deduplicated. `path` only labels errors.
pub fn uncovered_line_diagnostics(
    report: &CoverageReport,
    path: &Path,
) -> DiffcovResult<Vec<Diagnostic>> {
    let diagnostics: Vec<_> = report
        .file_stats(path)?
        .into_iter()
        .flat_map(|(file, stats)| {
            stats
                .violation_lines
                .into_iter()
                .map(move |line| Diagnostic::uncovered_line(file, line))
        })
        .collect();
    tracing::debug!(count = diagnostics.len(), "built uncovered line diagnostics");
    Ok(diagnostics)
}
