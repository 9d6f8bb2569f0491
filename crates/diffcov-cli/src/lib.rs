//! diffcov CLI library
//!
//! Shared pieces of the `diff-cover-to-reviewdog` and
//! `merge-diff-cover-reports` binaries.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod handlers;
mod logging;
mod output;

pub use commands::{ColorArg, ConvertCli, GlobalArgs, MergeCli};
pub use config::{CliConfig, ColorChoice, ReportPaths, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::{init_logging, log_filter};
pub use output::StatusReporter;

/// Status reporter matching the configured verbosity and colors
#[must_use]
pub fn status_reporter(config: &CliConfig) -> StatusReporter {
    StatusReporter::new(config.color.should_color(), config.verbosity.is_quiet())
}
