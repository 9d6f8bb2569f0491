//! diff-cover to reviewdog conversion handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::StatusReporter;
use diffcov::json::{self, JsonStyle};
use diffcov::{uncovered_line_diagnostics, CoverageReport};
use std::io::Write;
use std::path::Path;

/// How a conversion run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// Diagnostics were written to stdout
    Emitted(usize),
    /// The report had no uncovered lines
    NoViolations,
    /// The report file does not exist
    MissingReport,
    /// The report could not be processed
    Failed,
}

/// Execute the conversion, writing rdjsonl to `out`
///
/// Every failure is reported through `reporter`; nothing is propagated.
pub fn execute_convert<W: Write>(
    config: &CliConfig,
    out: &mut W,
    reporter: &StatusReporter,
) -> ConvertOutcome {
    let path = config.paths.merged_report_path();
    match write_diagnostics(&path, out) {
        Ok(0) => {
            reporter.notice(&format!(
                "No uncovered lines found in {}",
                config.paths.merged_report
            ));
            ConvertOutcome::NoViolations
        }
        Ok(count) => {
            tracing::info!(count, "emitted uncovered line diagnostics");
            ConvertOutcome::Emitted(count)
        }
        Err(e) if e.is_not_found() => {
            reporter.notice(&format!("{} not found", config.paths.merged_report));
            ConvertOutcome::MissingReport
        }
        Err(e) => {
            reporter.error(&format!("Error processing diff-cover report: {e}"));
            ConvertOutcome::Failed
        }
    }
}

/// Read the report at `path` and write one JSON line per uncovered line
///
/// The report is fully validated before anything is written.
pub fn write_diagnostics<W: Write>(path: &Path, out: &mut W) -> CliResult<usize> {
    let report = CoverageReport::from_path(path)?;
    let diagnostics = uncovered_line_diagnostics(&report, path)?;
    for diagnostic in &diagnostics {
        json::to_writer(&mut *out, diagnostic, JsonStyle::Line)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(diagnostics.len())
}
