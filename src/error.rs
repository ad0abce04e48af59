//! Error types for tmuxer.
//!
//! All errors in tmuxer are represented by [`TmuxerError`], which covers
//! configuration loading and failed tmux invocations.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in tmuxer.
#[derive(Error, Debug)]
pub enum TmuxerError {
    /// Config file does not exist at the expected path.
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Could not determine the user's config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Failed to read a file from disk.
    #[error("Failed to read config: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing failed.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// YAML parsing failed.
    #[error("Failed to parse config: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Config file extension is neither TOML nor YAML.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),

    /// The tmux binary could not be started at all.
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        /// The command line that was attempted.
        command: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// tmux ran but exited unsuccessfully.
    #[error("`{command}` failed ({status}){}", stderr_suffix(.stderr))]
    CommandFailed {
        /// The command line that failed.
        command: String,
        /// Exit status as reported by the OS.
        status: String,
        /// What tmux wrote to stderr, trimmed.
        stderr: String,
    },

    /// Strict mode stopped the layout at the first failing step.
    #[error("Aborted after `{command}` failed")]
    Aborted {
        /// The command line that triggered the abort.
        command: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Convenient Result type alias for tmuxer operations.
pub type Result<T> = std::result::Result<T, TmuxerError>;
