//! Merging per-shard diff-cover reports.
//!
//! Shards of a split test run each produce a partial report. The merged
//! report sums the line counters, unions `src_stats` with the later shard
//! winning on a path collision, and recomputes the covered percentage.

use crate::report::CoverageReport;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// `report_name` of a merged report
pub const MERGED_REPORT_NAME: &str = "XML";

/// `diff_name` of a merged report
pub const MERGED_DIFF_NAME: &str = "PR diff";

/// Covered-line percentage of a merged report
///
/// Serializes as the integer `100` when nothing was measured and as a float
/// otherwise, so `100` and `100.0` stay distinguishable in the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoveredPercent {
    /// No lines were measured
    NothingMeasured,
    /// Covered lines over measured lines, times 100
    Measured(f64),
}

impl CoveredPercent {
    /// Numeric value, 100 when nothing was measured
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::NothingMeasured => 100.0,
            Self::Measured(percent) => percent,
        }
    }
}

impl Serialize for CoveredPercent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::NothingMeasured => serializer.serialize_u64(100),
            Self::Measured(percent) => serializer.serialize_f64(percent),
        }
    }
}

/// Consolidated report written after merging shards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedReport {
    /// Always [`MERGED_REPORT_NAME`]
    pub report_name: String,
    /// Always [`MERGED_DIFF_NAME`]
    pub diff_name: String,
    /// Union of all shard `src_stats`
    pub src_stats: Map<String, Value>,
    /// Sum of shard `total_num_lines`
    pub total_num_lines: u64,
    /// Sum of shard `total_num_violations`
    pub total_num_violations: u64,
    /// Recomputed from the summed counters
    pub total_percent_covered: CoveredPercent,
    /// Sum of shard `num_changed_lines`
    pub num_changed_lines: u64,
}

impl Default for MergedReport {
    fn default() -> Self {
        Self {
            report_name: MERGED_REPORT_NAME.to_string(),
            diff_name: MERGED_DIFF_NAME.to_string(),
            src_stats: Map::new(),
            total_num_lines: 0,
            total_num_violations: 0,
            total_percent_covered: CoveredPercent::NothingMeasured,
            num_changed_lines: 0,
        }
    }
}

/// Percentage of measured lines that are covered
///
/// Nothing measured counts as fully covered (100). More violations than
/// lines clamps to 0.
#[must_use]
pub fn percent_covered(total_num_lines: u64, total_num_violations: u64) -> CoveredPercent {
    if total_num_lines == 0 {
        return CoveredPercent::NothingMeasured;
    }
    let covered = total_num_lines.saturating_sub(total_num_violations);
    CoveredPercent::Measured(covered as f64 / total_num_lines as f64 * 100.0)
}

/// Accumulates shard reports into a [`MergedReport`]
#[derive(Debug, Default)]
pub struct ReportMerger {
    merged: MergedReport,
    merged_count: usize,
}

impl ReportMerger {
    /// Start with fixed labels and zeroed counters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one shard into the running totals
    pub fn absorb(&mut self, shard: CoverageReport) {
        let merged = &mut self.merged;
        merged.total_num_lines = merged.total_num_lines.saturating_add(shard.total_num_lines);
        merged.total_num_violations = merged
            .total_num_violations
            .saturating_add(shard.total_num_violations);
        merged.num_changed_lines = merged
            .num_changed_lines
            .saturating_add(shard.num_changed_lines);
        // a colliding path keeps its position, the later value wins
        merged.src_stats.extend(shard.src_stats);
        self.merged_count += 1;
    }

    /// Number of shards absorbed so far
    #[must_use]
    pub const fn merged_count(&self) -> usize {
        self.merged_count
    }

    /// Recompute the percentage and return the consolidated report
    #[must_use]
    pub fn finish(self) -> MergedReport {
        let mut merged = self.merged;
        merged.total_percent_covered =
            percent_covered(merged.total_num_lines, merged.total_num_violations);
        merged
    }
}
