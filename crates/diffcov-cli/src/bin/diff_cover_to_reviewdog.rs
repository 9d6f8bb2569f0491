//! diff-cover-to-reviewdog: uncovered lines as reviewdog diagnostics
//!
//! ```bash
//! diff-cover-to-reviewdog | reviewdog -f=rdjsonl -reporter=github-pr-review
//! ```

use clap::Parser;
use diffcov_cli::{handlers::execute_convert, init_logging, status_reporter, ConvertCli};
use std::io::BufWriter;
use std::process::ExitCode;

// Always exits 0, whatever happened.
fn main() -> ExitCode {
    let cli = match ConvertCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    let config = cli.global.to_config();
    init_logging(config.verbosity);
    let reporter = status_reporter(&config);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let outcome = execute_convert(&config, &mut out, &reporter);
    tracing::debug!(?outcome, "conversion finished");

    ExitCode::SUCCESS
}
