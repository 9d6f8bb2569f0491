//! diff-cover JSON report model.
//!
//! Only the fields this crate consumes are typed. Per-file entries of
//! `src_stats` stay opaque so a merge carries them through untouched.

use crate::result::{DiffcovError, DiffcovResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Report file read by the converter and written by the merger
pub const MERGED_REPORT_FILE: &str = "diff-cover.json";

/// Glob pattern matching per-shard reports
pub const SHARD_REPORT_PATTERN: &str = "diff-cover-*.json";

/// A diff-cover JSON report, as produced by `diff-cover --json-report`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Per-file statistics keyed by source path, in document order
    #[serde(default)]
    pub src_stats: Map<String, Value>,
    /// Number of changed lines measured
    #[serde(default)]
    pub total_num_lines: u64,
    /// Number of measured lines not covered by tests
    #[serde(default)]
    pub total_num_violations: u64,
    /// Number of changed lines in the diff
    #[serde(default)]
    pub num_changed_lines: u64,
}

/// The part of a `src_stats` entry the converter reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileStats {
    /// Uncovered line numbers, in report order
    #[serde(default)]
    pub violation_lines: Vec<u64>,
}

impl CoverageReport {
    /// Parse a report from JSON text
    pub fn from_json(path: &Path, content: &str) -> DiffcovResult<Self> {
        serde_json::from_str(content).map_err(|source| DiffcovError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a report file
    pub fn from_path(path: &Path) -> DiffcovResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| DiffcovError::io(path, e))?;
        let report = Self::from_json(path, &content)?;
        tracing::debug!(
            path = %path.display(),
            files = report.src_stats.len(),
            "parsed coverage report"
        );
        Ok(report)
    }

    /// Typed per-file statistics, in `src_stats` order
    ///
    /// `path` only labels errors. Fails on the first entry that is not an
    /// object with an integer `violation_lines` list.
    pub fn file_stats(&self, path: &Path) -> DiffcovResult<Vec<(&str, FileStats)>> {
        self.src_stats
            .iter()
            .map(|(file, entry)| {
                if !entry.is_object() {
                    return Err(DiffcovError::shape(
                        path,
                        format!("src_stats entry for {file} is not an object"),
                    ));
                }
                FileStats::deserialize(entry)
                    .map(|stats| (file.as_str(), stats))
                    .map_err(|e| {
                        DiffcovError::shape(path, format!("src_stats entry for {file}: {e}"))
                    })
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(json: &str) -> CoverageReport {
        CoverageReport::from_json(Path::new("test.json"), json).unwrap()
    }

    #[test]
    fn test_empty_object_defaults() {
        let report = parse("{}");
        assert!(report.src_stats.is_empty());
        assert_eq!(report.total_num_lines, 0);
        assert_eq!(report.total_num_violations, 0);
        assert_eq!(report.num_changed_lines, 0);
    }

    #[test]
    fn test_unknown_top_level_fields_ignored() {
        let report = parse(
            r#"{"report_name": "XML", "diff_name": "origin/main...HEAD",
                "total_percent_covered": 80, "total_num_lines": 5}"#,
        );
        assert_eq!(report.total_num_lines, 5);
    }

    #[test]
    fn test_src_stats_keeps_document_order() {
        let report = parse(
            r#"{"src_stats": {"z.py": {}, "a.py": {}, "m.py": {}}}"#,
        );
        let keys: Vec<_> = report.src_stats.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z.py", "a.py", "m.py"]);
    }

    #[test]
    fn test_file_stats_missing_violation_lines_is_empty() {
        let report = parse(r#"{"src_stats": {"a.py": {"percent_covered": 100.0}}}"#);
        let stats = report.file_stats(Path::new("test.json")).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].0, "a.py");
        assert!(stats[0].1.violation_lines.is_empty());
    }

    #[test]
    fn test_file_stats_keeps_line_order() {
        let report = parse(r#"{"src_stats": {"a.py": {"violation_lines": [9, 2, 5]}}}"#);
        let stats = report.file_stats(Path::new("test.json")).unwrap();
        assert_eq!(stats[0].1.violation_lines, vec![9, 2, 5]);
    }

    #[test]
    fn test_file_stats_rejects_non_object_entry() {
        let report = parse(r#"{"src_stats": {"a.py": [1, 2]}}"#);
        let err = report.file_stats(Path::new("test.json")).unwrap_err();
        assert!(matches!(err, DiffcovError::Shape { .. }));
        assert!(err.to_string().contains("a.py"));
    }

    #[test]
    fn test_file_stats_rejects_non_integer_lines() {
        let report = parse(r#"{"src_stats": {"a.py": {"violation_lines": ["x"]}}}"#);
        assert!(report.file_stats(Path::new("test.json")).is_err());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = CoverageReport::from_json(Path::new("bad.json"), "not json").unwrap_err();
        assert!(matches!(err, DiffcovError::Parse { .. }));
    }

    #[test]
    fn test_wrong_counter_type_is_parse_error() {
        let err =
            CoverageReport::from_json(Path::new("bad.json"), r#"{"total_num_lines": "ten"}"#)
                .unwrap_err();
        assert!(matches!(err, DiffcovError::Parse { .. }));
    }

    #[test]
    fn test_from_path_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = CoverageReport::from_path(&temp.path().join(MERGED_REPORT_FILE)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_path_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MERGED_REPORT_FILE);
        std::fs::write(&path, r#"{"total_num_violations": 4}"#).unwrap();
        let report = CoverageReport::from_path(&path).unwrap();
        assert_eq!(report.total_num_violations, 4);
    }
}
