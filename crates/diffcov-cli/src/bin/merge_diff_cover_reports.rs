//! merge-diff-cover-reports: combine shard reports into diff-cover.json
//!
//! ```bash
//! merge-diff-cover-reports   # reads diff-cover-*.json, writes diff-cover.json
//! ```

use clap::Parser;
use diffcov_cli::{handlers::execute_merge, init_logging, status_reporter, MergeCli};
use std::process::ExitCode;

// Always exits 0, whatever happened.
fn main() -> ExitCode {
    let cli = match MergeCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    let config = cli.global.to_config();
    init_logging(config.verbosity);
    let reporter = status_reporter(&config);

    let mut out = std::io::stdout().lock();
    let outcome = execute_merge(&config, &mut out, &reporter);
    tracing::debug!(?outcome, "merge finished");

    ExitCode::SUCCESS
}
