//! Tmux operations and the executor that runs them.
//!
//! Every tmux call is described by an [`Operation`] and turned into an
//! argument vector, so session names and pane commands are never spliced
//! into a shell string. The [`Multiplexer`] trait is the only seam between
//! layout logic and the real tmux server.

use crate::config::Layout;
use crate::error::{Result, TmuxerError};
use std::fmt;
use std::process::Command;
use tracing::debug;

/// Line count for every split after the first.
///
/// Kept for compatibility only; the final `select-layout` overrides it.
pub const SPLIT_LINES: u32 = 10;

/// A `session:window` target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub session: String,
    pub window: String,
}

impl Target {
    pub fn new(session: impl Into<String>, window: impl Into<String>) -> Self {
        Target {
            session: session.into(),
            window: window.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.session, self.window)
    }
}

/// A single state-changing tmux command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `new-session -d -s <session>`
    NewSession { session: String },
    /// `new-window -t <session> -n <window>`
    NewWindow { session: String, window: String },
    /// `split-window -t <target> -v [-l <lines>] <command>`
    SplitWindow {
        target: Target,
        lines: Option<u32>,
        command: String,
    },
    /// `select-layout -t <target> <layout>`
    SelectLayout { target: Target, layout: Layout },
}

impl Operation {
    /// Arguments passed to the tmux binary, without the binary itself.
    pub fn args(&self) -> Vec<String> {
        match self {
            Operation::NewSession { session } => {
                vec!["new-session".into(), "-d".into(), "-s".into(), session.clone()]
            }
            Operation::NewWindow { session, window } => vec![
                "new-window".into(),
                "-t".into(),
                session.clone(),
                "-n".into(),
                window.clone(),
            ],
            Operation::SplitWindow {
                target,
                lines,
                command,
            } => {
                let mut args = vec![
                    "split-window".into(),
                    "-t".into(),
                    target.to_string(),
                    "-v".into(),
                ];
                if let Some(lines) = lines {
                    args.push("-l".into());
                    args.push(lines.to_string());
                }
                // An empty command would make tmux run nothing; let it start the default shell.
                if !command.is_empty() {
                    args.push(command.clone());
                }
                args
            }
            Operation::SelectLayout { target, layout } => vec![
                "select-layout".into(),
                "-t".into(),
                target.to_string(),
                layout.to_tmux_layout().into(),
            ],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tmux")?;
        for arg in self.args() {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// The narrow interface tmuxer needs from a terminal multiplexer.
pub trait Multiplexer {
    /// Run one state-changing operation and wait for it to finish.
    fn execute(&mut self, op: &Operation) -> Result<()>;

    /// Whether a session with this name is currently running.
    fn has_session(&mut self, session: &str) -> Result<bool>;

    /// Attach the controlling terminal to a session, blocking until the
    /// client detaches or the session ends.
    fn attach(&mut self, session: &str) -> Result<()>;
}

/// The real tmux binary.
#[derive(Debug, Clone)]
pub struct Tmux {
    program: String,
}

impl Default for Tmux {
    fn default() -> Self {
        Tmux::new("tmux")
    }
}

impl Tmux {
    /// Drive the tmux binary found at `program` (resolved through `PATH`).
    pub fn new(program: impl Into<String>) -> Self {
        Tmux {
            program: program.into(),
        }
    }

    fn command_line(&self, args: &[String]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    /// Run tmux with captured output and turn a non-zero exit into an error
    /// carrying tmux's stderr.
    fn run(&self, args: &[String]) -> Result<()> {
        let command = self.command_line(args);
        debug!(%command, "running");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| TmuxerError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TmuxerError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }

    /// Run tmux with inherited stdio; used only for the interactive attach.
    fn run_interactive(&self, args: &[String]) -> Result<()> {
        let command = self.command_line(args);
        debug!(%command, "running interactively");

        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|source| TmuxerError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(TmuxerError::CommandFailed {
                command,
                status: status.to_string(),
                stderr: String::new(),
            });
        }

        Ok(())
    }
}

impl Multiplexer for Tmux {
    fn execute(&mut self, op: &Operation) -> Result<()> {
        self.run(&op.args())
    }

    fn has_session(&mut self, session: &str) -> Result<bool> {
        let args = ["has-session".to_string(), "-t".into(), session.into()];
        let command = self.command_line(&args);
        debug!(%command, "probing");

        // `output()` keeps tmux's "can't find session" message off the terminal.
        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| TmuxerError::Spawn { command, source })?;

        Ok(output.status.success())
    }

    fn attach(&mut self, session: &str) -> Result<()> {
        self.run_interactive(&["attach-session".into(), "-t".into(), session.into()])
    }
}

/// A recording multiplexer for tests.
#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Default)]
    pub struct FakeMux {
        /// Every operation passed to `execute`, in order.
        pub ops: Vec<Operation>,
        /// Sessions `has_session` reports as running.
        pub sessions: HashSet<String>,
        /// Names passed to `has_session`.
        pub probes: Vec<String>,
        /// Names passed to `attach`.
        pub attached: Vec<String>,
        /// Zero-based indexes of `execute` calls that fail.
        pub fail_at: HashSet<usize>,
        pub fail_probe: bool,
        pub fail_attach: bool,
    }

    impl FakeMux {
        pub fn failing_at(indexes: &[usize]) -> Self {
            FakeMux {
                fail_at: indexes.iter().copied().collect(),
                ..FakeMux::default()
            }
        }

        fn failure(command: String) -> TmuxerError {
            TmuxerError::CommandFailed {
                command,
                status: "exit status: 1".into(),
                stderr: String::new(),
            }
        }
    }

    impl Multiplexer for FakeMux {
        fn execute(&mut self, op: &Operation) -> Result<()> {
            let index = self.ops.len();
            self.ops.push(op.clone());
            if self.fail_at.contains(&index) {
                return Err(Self::failure(op.to_string()));
            }
            if let Operation::NewSession { session } = op {
                self.sessions.insert(session.clone());
            }
            Ok(())
        }

        fn has_session(&mut self, session: &str) -> Result<bool> {
            self.probes.push(session.to_string());
            if self.fail_probe {
                return Err(Self::failure(format!("tmux has-session -t {}", session)));
            }
            Ok(self.sessions.contains(session))
        }

        fn attach(&mut self, session: &str) -> Result<()> {
            self.attached.push(session.to_string());
            if self.fail_attach {
                return Err(Self::failure(format!("tmux attach-session -t {}", session)));
            }
            Ok(())
        }
    }
}
