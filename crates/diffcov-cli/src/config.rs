//! CLI configuration

use diffcov::{MERGED_REPORT_FILE, SHARD_REPORT_PATTERN};
use std::path::{Path, PathBuf};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - info logging
    Verbose,
    /// Debug - debug logging
    Debug,
    /// Trace - everything
    Trace,
}

impl Verbosity {
    /// Map `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Log filter directive for this level
    #[must_use]
    pub const fn log_directive(self) -> &'static str {
        match self {
            Self::Quiet => "off",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when standard error is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

/// Where reports are read from and written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// Directory holding the reports
    pub working_dir: PathBuf,
    /// Report read by the converter and written by the merger
    pub merged_report: String,
    /// Glob pattern (file name only) for shard reports
    pub shard_pattern: String,
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            merged_report: MERGED_REPORT_FILE.to_string(),
            shard_pattern: SHARD_REPORT_PATTERN.to_string(),
        }
    }
}

impl ReportPaths {
    /// Full path of the merged report
    #[must_use]
    pub fn merged_report_path(&self) -> PathBuf {
        self.working_dir.join(&self.merged_report)
    }

    /// Glob matching shard reports inside the working directory
    ///
    /// The directory part is escaped so only the file-name pattern is
    /// interpreted.
    #[must_use]
    pub fn shard_glob(&self) -> String {
        let dir = glob::Pattern::escape(&self.working_dir.to_string_lossy());
        Path::new(&dir)
            .join(&self.shard_pattern)
            .to_string_lossy()
            .into_owned()
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Report locations
    pub paths: ReportPaths,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set the directory reports live in
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.paths.working_dir = dir.into();
        self
    }
}
