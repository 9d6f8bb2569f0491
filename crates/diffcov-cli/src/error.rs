//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
///
/// None of these reach the process exit code; handlers report them on
/// standard error and carry on.
#[derive(Debug, Error)]
pub enum CliError {
    /// Report model or rendering error
    #[error(transparent)]
    Report(#[from] diffcov::DiffcovError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Shard discovery error
    #[error("Invalid report pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Result could not be printed to standard output
    #[error("Output error: {message}")]
    Output {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an output error
    #[must_use]
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Whether the underlying report file is missing
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Report(e) if e.is_not_found())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: CliError = io_err.into();
        assert!(err.to_string().contains("I/O"));
        assert!(err.to_string().contains("stdout closed"));
    }

    #[test]
    fn test_report_error_is_transparent() {
        let err: CliError = diffcov::DiffcovError::shape("a.json", "bad entry").into();
        assert_eq!(err.to_string(), "a.json: bad entry");
    }

    #[test]
    fn test_not_found_detection() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CliError = diffcov::DiffcovError::io("diff-cover.json", missing).into();
        assert!(err.is_not_found());

        let io_err: CliError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!io_err.is_not_found());
    }

    #[test]
    fn test_output_error() {
        let err = CliError::output("stdout closed");
        assert!(matches!(err, CliError::Output { .. }));
        assert_eq!(err.to_string(), "Output error: stdout closed");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_pattern_error_from() {
        let err: CliError = glob::Pattern::new("[").unwrap_err().into();
        assert!(err.to_string().contains("pattern"));
    }
}
