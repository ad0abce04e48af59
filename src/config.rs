//! Configuration types for tmuxer.
//!
//! The config is a single ordered list of sessions. Order matters everywhere:
//! sessions, windows and panes are created in the order they are declared,
//! and the first session is the one tmuxer attaches to.
//!
//! # Config Format
//!
//! ```toml
//! [[sessions]]
//! name = "dev"
//!
//! [[sessions.windows]]
//! name = "editor"
//! panes = [
//!     { command = "vim" },
//!     "make watch",
//! ]
//!
//! [[sessions.windows]]
//! name = "logs"
//! layout = "horizontal"
//! panes = ["tail -f app.log"]
//! ```
//!
//! The same structure is accepted as YAML:
//!
//! ```yaml
//! sessions:
//!   - name: dev
//!     windows:
//!       - name: editor
//!         panes:
//!           - command: vim
//!           - command: make watch
//! ```

use crate::error::{Result, TmuxerError};
use serde::Deserialize;
use std::path::Path;

/// Layout options for tmux panes.
///
/// Maps to tmux's built-in layout algorithms:
/// - `Tiled`: Spread panes evenly in both directions
/// - `Vertical`: Side-by-side panes (tmux's "even-horizontal")
/// - `Horizontal`: Stacked panes (tmux's "even-vertical")
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Spread panes evenly (tmux: "tiled").
    #[default]
    Tiled,
    /// Side-by-side panes (tmux: "even-horizontal").
    #[serde(alias = "even-horizontal")]
    Vertical,
    /// Stacked panes (tmux: "even-vertical").
    #[serde(alias = "even-vertical")]
    Horizontal,
}

impl Layout {
    /// Convert to the tmux layout name used by `select-layout`.
    pub fn to_tmux_layout(&self) -> &'static str {
        match self {
            Layout::Tiled => "tiled",
            Layout::Vertical => "even-horizontal",
            Layout::Horizontal => "even-vertical",
        }
    }
}

/// A single pane and the command it starts with.
///
/// Accepts either a table or a bare string:
/// ```toml
/// panes = [{ command = "vim" }, "make watch"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PaneDef")]
pub struct Pane {
    /// Shell command run inside the pane when it is created.
    pub command: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaneDef {
    Bare(String),
    Table { command: String },
}

impl From<PaneDef> for Pane {
    fn from(def: PaneDef) -> Self {
        match def {
            PaneDef::Bare(command) | PaneDef::Table { command } => Pane { command },
        }
    }
}

impl Pane {
    /// Create a pane running `command`.
    pub fn new(command: impl Into<String>) -> Self {
        Pane {
            command: command.into(),
        }
    }
}

/// A named window and its panes, in split order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Window {
    /// Window name, used as the tmux target `session:window`.
    pub name: String,
    /// Panes created by splitting, in order.
    #[serde(default)]
    pub panes: Vec<Pane>,
    /// Arrangement applied once every pane exists.
    #[serde(default)]
    pub layout: Layout,
}

/// A named session and its windows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    /// Session name, unique within the running tmux server.
    pub name: String,
    /// Windows created in order.
    #[serde(default)]
    pub windows: Vec<Window>,
}

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Sessions in creation order. The first one is attached at the end.
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// On-disk config formats, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// File names tried, in order, when looking for a config in a directory.
    pub const FILE_NAMES: [&'static str; 3] = ["config.toml", "config.yaml", "config.yml"];

    /// Detect the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`TmuxerError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(TmuxerError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl Config {
    /// Parse config from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Parse config text in the given format.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Toml => Config::from_toml(contents),
            ConfigFormat::Yaml => Config::from_yaml(contents),
        }
    }

    /// The session tmuxer attaches to once the layout is built.
    pub fn first_session(&self) -> Option<&Session> {
        self.sessions.first()
    }
}
