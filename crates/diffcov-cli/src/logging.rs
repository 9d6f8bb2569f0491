//! Tracing subscriber setup

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Filter for the given verbosity
///
/// Built from the verbosity flags only; `RUST_LOG` is not consulted.
#[must_use]
pub fn log_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::new(verbosity.log_directive())
}

/// Install a stderr `fmt` subscriber for the process
///
/// A subscriber that is already installed is left in place.
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
