//! # Tmuxer
//!
//! Builds tmux sessions, windows and panes from a declarative config, then
//! attaches to the first session.
//!
//! ## Quick Example
//!
//! ```toml
//! # ./config.toml
//!
//! [[sessions]]
//! name = "dev"
//!
//! [[sessions.windows]]
//! name = "editor"
//! panes = ["vim", "make watch"]
//! ```
//!
//! Running `tmuxer` with this file issues, in order:
//!
//! ```text
//! tmux new-session -d -s dev
//! tmux new-window -t dev -n editor
//! tmux split-window -t dev:editor -v vim
//! tmux split-window -t dev:editor -v -l 10 "make watch"
//! tmux select-layout -t dev:editor tiled
//! tmux has-session -t dev
//! tmux attach-session -t dev
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`config`]: Session/window/pane data structures, TOML and YAML parsing
//! - [`display`]: Human-readable rendering of a config
//! - [`cli`]: Command-line argument parsing with clap
//! - [`loader`]: Config file discovery and loading
//! - [`tmux`]: Tmux operations, the [`Multiplexer`] trait and its executor
//! - [`compiler`]: Config → ordered tmux operations, and running them
//! - [`attach`]: Idempotent attach to the first session
//! - [`error`]: Error types

pub mod attach;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod display;
pub mod error;
pub mod loader;
pub mod tmux;

pub use compiler::{FailurePolicy, Report};
pub use config::{Config, Layout, Pane, Session, Window};
pub use error::{Result, TmuxerError};
pub use tmux::{Multiplexer, Operation, Tmux};
