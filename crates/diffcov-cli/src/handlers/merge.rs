//! Shard report merge handler

use crate::config::{CliConfig, ReportPaths};
use crate::error::{CliError, CliResult};
use crate::output::StatusReporter;
use diffcov::json::{self, JsonStyle};
use diffcov::{CoverageReport, MergedReport, ReportMerger};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Counts from a merge run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeSummary {
    /// Shard reports folded into the output
    pub merged: usize,
    /// Shard reports that could not be read or parsed
    pub skipped: usize,
}

/// How a merge run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// No shard reports matched the pattern; nothing was written
    NoReports,
    /// The merged report was written
    Written(MergeSummary),
    /// Merging finished but the output file could not be written
    WriteFailed(MergeSummary),
    /// Shard discovery failed
    Failed,
}

/// Execute the merge, printing the summary line to `out`
///
/// Every failure is reported through `reporter`; nothing is propagated.
pub fn execute_merge<W: Write>(
    config: &CliConfig,
    out: &mut W,
    reporter: &StatusReporter,
) -> MergeOutcome {
    let shards = match discover_shards(&config.paths) {
        Ok(shards) => shards,
        Err(e) => {
            reporter.error(&format!("Error discovering diff-cover reports: {e}"));
            return MergeOutcome::Failed;
        }
    };

    if shards.is_empty() {
        reporter.notice("No diff-cover reports found to merge");
        return MergeOutcome::NoReports;
    }

    let (merged, summary) = merge_shards(&shards, reporter);

    let output = config.paths.merged_report_path();
    if let Err(e) = write_merged_report(&output, &merged) {
        reporter.error(&format!(
            "Error writing {}: {e}",
            config.paths.merged_report
        ));
        return MergeOutcome::WriteFailed(summary);
    }

    let line = summary_line(&summary, &config.paths.merged_report);
    if let Err(e) = print_summary(out, &line) {
        reporter.error(&format!("Error printing merge summary: {e}"));
    }
    MergeOutcome::Written(summary)
}

/// Print the summary line to `out`
pub fn print_summary<W: Write>(out: &mut W, line: &str) -> CliResult<()> {
    writeln!(out, "{line}")
        .and_then(|()| out.flush())
        .map_err(|e| CliError::output(e.to_string()))
}

/// Shard report files in the working directory, in glob order
///
/// Directories whose names match the pattern are ignored.
pub fn discover_shards(paths: &ReportPaths) -> CliResult<Vec<PathBuf>> {
    let pattern = paths.shard_glob();
    let mut shards = Vec::new();
    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) if path.is_file() => shards.push(path),
            Ok(path) => tracing::debug!(path = %path.display(), "ignoring non-file match"),
            Err(e) => tracing::warn!(error = %e, "unreadable entry while listing reports"),
        }
    }
    tracing::debug!(pattern = %pattern, count = shards.len(), "discovered shard reports");
    Ok(shards)
}

/// Fold every readable shard into one report
///
/// A shard that fails to read or parse is reported and skipped.
pub fn merge_shards(shards: &[PathBuf], reporter: &StatusReporter) -> (MergedReport, MergeSummary) {
    let mut merger = ReportMerger::new();
    let mut skipped = 0;
    for shard in shards {
        reporter.info(&format!("Merging {}", shard.display()));
        match CoverageReport::from_path(shard) {
            Ok(report) => {
                tracing::info!(
                    path = %shard.display(),
                    files = report.src_stats.len(),
                    lines = report.total_num_lines,
                    "merging shard report"
                );
                merger.absorb(report);
            }
            Err(e) => {
                reporter.error(&format!("Error reading {e}"));
                skipped += 1;
            }
        }
    }
    let summary = MergeSummary {
        merged: merger.merged_count(),
        skipped,
    };
    (merger.finish(), summary)
}

/// Write the merged report with two-space indentation, replacing any
/// existing file
pub fn write_merged_report(path: &Path, merged: &MergedReport) -> CliResult<()> {
    let text = json::to_string(merged, JsonStyle::Pretty)?;
    std::fs::write(path, text)?;
    Ok(())
}

/// One-line human summary of a merge
#[must_use]
pub fn summary_line(summary: &MergeSummary, output_name: &str) -> String {
    let line = format!("Merged {} reports into {output_name}", summary.merged);
    if summary.skipped > 0 {
        format!("{line} ({} skipped)", summary.skipped)
    } else {
        line
    }
}
