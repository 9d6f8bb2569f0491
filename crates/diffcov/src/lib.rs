//! diffcov: post-processing for diff-cover JSON reports
//!
//! Two transformations used in CI pipelines:
//!
//! - [`uncovered_line_diagnostics`] turns a report into reviewdog diagnostics,
//!   one per uncovered line.
//! - [`ReportMerger`] folds per-shard reports from a split test run into one
//!   consolidated [`MergedReport`].
//!
//! ```text
//!  diff-cover-1.json ─┐
//!  diff-cover-2.json ─┼─► ReportMerger ─► diff-cover.json ─► diagnostics ─► reviewdog
//!  diff-cover-N.json ─┘
//! ```
//!
//! Rendering goes through [`json`] so output matches what Python's `json`
//! module would have produced for the same data.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod json;
pub mod merge;
pub mod report;
mod result;

pub use diagnostic::{
    uncovered_line_diagnostics, Diagnostic, Location, Position, Range, Severity,
    UNCOVERED_LINE_MESSAGE,
};
pub use json::{JsonStyle, PyJsonFormatter};
pub use merge::{
    percent_covered, CoveredPercent, MergedReport, ReportMerger, MERGED_DIFF_NAME,
    MERGED_REPORT_NAME,
};
pub use report::{CoverageReport, FileStats, MERGED_REPORT_FILE, SHARD_REPORT_PATTERN};
pub use result::{DiffcovError, DiffcovResult};
