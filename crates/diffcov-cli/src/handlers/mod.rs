//! Command handlers - kept out of the binaries for testability
//!
//! Each handler takes a [`crate::CliConfig`], a writer standing in for
//! stdout and a [`crate::StatusReporter`], and returns an outcome instead of
//! an error: both tools must never fail the surrounding pipeline.

pub mod convert;
pub mod merge;

pub use convert::{execute_convert, write_diagnostics, ConvertOutcome};
pub use merge::{
    discover_shards, execute_merge, merge_shards, summary_line, write_merged_report,
    MergeOutcome, MergeSummary,
};
