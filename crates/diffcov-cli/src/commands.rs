//! CLI command definitions using clap
//!
//! Neither tool takes options that change what is read or written; the
//! report locations are fixed. Only output and logging can be tuned.

use crate::config::{CliConfig, ColorChoice, Verbosity};
use clap::{Args, Parser, ValueEnum};

/// Flags shared by both tools
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress informational messages and logging)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color of status messages on stderr (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorArg,
}

impl GlobalArgs {
    /// Build configuration from the flags, with default report paths
    #[must_use]
    pub fn to_config(&self) -> CliConfig {
        CliConfig::new()
            .with_verbosity(Verbosity::from_flags(self.quiet, self.verbose))
            .with_color(self.color.clone().into())
    }
}

/// Convert diff-cover.json into reviewdog diagnostics (rdjsonl) on stdout
///
/// Prints one diagnostic per uncovered line. Always exits 0 so a missing or
/// broken report never fails the pipeline.
#[derive(Parser, Debug)]
#[command(name = "diff-cover-to-reviewdog")]
#[command(author, version, about, long_about = None)]
pub struct ConvertCli {
    /// Output and logging flags
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Merge diff-cover-*.json shard reports into diff-cover.json
///
/// Sums the line counters, unions per-file stats and recomputes the covered
/// percentage. Always exits 0; unreadable shards are skipped.
#[derive(Parser, Debug)]
#[command(name = "merge-diff-cover-reports")]
#[command(author, version, about, long_about = None)]
pub struct MergeCli {
    /// Output and logging flags
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions_are_valid() {
        ConvertCli::command().debug_assert();
        MergeCli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_default() {
        let cli = ConvertCli::try_parse_from(["diff-cover-to-reviewdog"]).unwrap();
        assert_eq!(cli.global.verbose, 0);
        assert!(!cli.global.quiet);
        assert_eq!(cli.global.to_config().verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_verbose_count() {
        let cli = MergeCli::try_parse_from(["merge-diff-cover-reports", "-vv"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.to_config().verbosity, Verbosity::Debug);
    }

    #[test]
    fn test_quiet_and_color() {
        let cli = MergeCli::try_parse_from(["merge-diff-cover-reports", "-q", "--color", "never"])
            .unwrap();
        let config = cli.global.to_config();
        assert_eq!(config.verbosity, Verbosity::Quiet);
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_positional_args_rejected() {
        assert!(ConvertCli::try_parse_from(["diff-cover-to-reviewdog", "other.json"]).is_err());
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
    }
}
