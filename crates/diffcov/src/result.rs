//! Result and error types for diffcov.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for diffcov operations
pub type DiffcovResult<T> = Result<T, DiffcovError>;

/// Errors that can occur while reading or rendering coverage reports
#[derive(Debug, Error)]
pub enum DiffcovError {
    /// Report file does not exist
    #[error("{} not found", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Report file could not be read or written
    #[error("{}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Report file is not valid JSON for a coverage report
    #[error("{}: {source}", path.display())]
    Parse {
        /// Path being parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Report parsed as JSON but an entry has an unexpected structure
    #[error("{}: {message}", path.display())]
    Shape {
        /// Path being parsed
        path: PathBuf,
        /// What was wrong with the entry
        message: String,
    },

    /// Rendering a value to JSON failed
    #[error("JSON rendering failed: {0}")]
    Render(#[from] serde_json::Error),
}

impl DiffcovError {
    /// Build an I/O error, mapping `NotFound` to [`DiffcovError::NotFound`]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create a shape error
    pub fn shape(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Shape {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the error means the report file is absent
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
