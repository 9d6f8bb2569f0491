//! Status reporting on standard error
//!
//! Standard output is reserved for results (diagnostics, the merge summary),
//! so every human-facing status line goes through [`StatusReporter`].

use console::{style, Term};

/// Writes status lines to standard error
#[derive(Debug)]
pub struct StatusReporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl StatusReporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Always printed, even in quiet mode
        let line = if self.use_color {
            style(message).red().to_string()
        } else {
            message.to_string()
        };
        let _ = self.term.write_line(&line);
    }

    /// Print a notice (expected but noteworthy condition)
    pub fn notice(&self, message: &str) {
        let line = if self.use_color {
            style(message).yellow().to_string()
        } else {
            message.to_string()
        };
        let _ = self.term.write_line(&line);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let line = if self.use_color {
            style(message).dim().to_string()
        } else {
            message.to_string()
        };
        let _ = self.term.write_line(&line);
    }
}
