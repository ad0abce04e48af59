//! Command-line interface for tmuxer.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options. Running with no arguments builds every
//! configured session and attaches to the first one.

use crate::compiler::FailurePolicy;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Command-line arguments for tmuxer.
///
/// # Examples
///
/// ```bash
/// # Build everything from ./config.toml (or ~/.config/tmuxer/) and attach
/// tmuxer
///
/// # Use a specific file and stop at the first tmux failure
/// tmuxer --config ~/layouts/work.yaml --strict
/// ```
#[derive(Parser, Debug)]
#[command(name = "tmuxer")]
#[command(version)]
#[command(about = "A CLI tool to manage preconfigurable Tmux sessions")]
#[command(long_about = "Tmuxer reads a list of sessions, windows and panes from a config file,\n\
    creates them in tmux, then attaches to the first session.")]
pub struct Cli {
    /// Config file to load instead of searching the default locations.
    #[arg(short, long, value_name = "PATH", env = "TMUXER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Stop at the first failing tmux command and exit non-zero.
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug). `TMUXER_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Failure policy selected by `--strict`.
    pub fn policy(&self) -> FailurePolicy {
        if self.strict {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Continue
        }
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["tmuxer"]).unwrap();
        assert_eq!(cli.policy(), FailurePolicy::Continue);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["tmuxer", "-c", "layout.yaml", "--strict", "-vv"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("layout.yaml")));
        assert_eq!(cli.policy(), FailurePolicy::Abort);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["tmuxer", "dev"]).is_err());
    }
}
