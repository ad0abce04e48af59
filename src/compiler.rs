//! Layout compilation.
//!
//! Turns the Session → Window → Pane tree into the ordered tmux operations
//! that rebuild it, then runs them one at a time. A window starts with one
//! implicit pane, so every configured pane is produced by a split of it:
//! the first split is unconstrained, later ones are [`SPLIT_LINES`] high,
//! and the window's layout evens everything out at the end.

use crate::config::{Config, Session, Window};
use crate::error::{Result, TmuxerError};
use crate::tmux::{Multiplexer, Operation, SPLIT_LINES, Target};
use std::io::Write;
use tracing::{debug, warn};

/// What to do when a step fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the failure and carry on with the next step.
    #[default]
    Continue,
    /// Stop at the first failing step.
    Abort,
}

/// One executed operation and how it went.
#[derive(Debug)]
pub struct Step {
    pub op: Operation,
    pub outcome: Result<()>,
}

/// Outcome of [`apply`]: every executed step, in order.
#[derive(Debug, Default)]
pub struct Report {
    pub steps: Vec<Step>,
    /// Operations that were planned but never run because of [`FailurePolicy::Abort`].
    pub skipped: usize,
}

impl Report {
    /// Steps whose operation failed.
    pub fn failures(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|step| step.outcome.is_err())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn succeeded(&self) -> usize {
        self.steps.len() - self.failure_count()
    }

    /// Write one line per failed step, then a summary if anything failed.
    ///
    /// Writes nothing for a clean run.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for step in self.failures() {
            if let Err(ref e) = step.outcome {
                writeln!(out, "Error executing command: {}", e)?;
            }
        }

        let failed = self.failure_count();
        if failed > 0 {
            writeln!(
                out,
                "Completed {} of {} tmux commands ({} failed, {} skipped)",
                self.succeeded(),
                self.steps.len() + self.skipped,
                failed,
                self.skipped
            )?;
        }
        Ok(())
    }

    /// Decide whether the run may continue to attach.
    ///
    /// [`FailurePolicy::Continue`] always succeeds; [`FailurePolicy::Abort`]
    /// fails on the first failed step.
    pub fn finish(self, policy: FailurePolicy) -> Result<()> {
        match policy {
            FailurePolicy::Continue => Ok(()),
            FailurePolicy::Abort => self.into_result(),
        }
    }

    /// Collapse into a single result: the first failure, as [`TmuxerError::Aborted`].
    pub fn into_result(self) -> Result<()> {
        match self.steps.into_iter().find(|step| step.outcome.is_err()) {
            Some(step) => Err(TmuxerError::Aborted {
                command: step.op.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Build the full operation sequence for a config without running anything.
pub fn plan(config: &Config) -> Vec<Operation> {
    let mut ops = Vec::new();
    for session in &config.sessions {
        plan_session(session, &mut ops);
    }
    ops
}

fn plan_session(session: &Session, ops: &mut Vec<Operation>) {
    ops.push(Operation::NewSession {
        session: session.name.clone(),
    });

    for window in &session.windows {
        plan_window(&session.name, window, ops);
    }
}

fn plan_window(session: &str, window: &Window, ops: &mut Vec<Operation>) {
    ops.push(Operation::NewWindow {
        session: session.to_string(),
        window: window.name.clone(),
    });

    let target = Target::new(session, window.name.as_str());
    for (i, pane) in window.panes.iter().enumerate() {
        ops.push(Operation::SplitWindow {
            target: target.clone(),
            lines: (i > 0).then_some(SPLIT_LINES),
            command: pane.command.clone(),
        });
    }

    ops.push(Operation::SelectLayout {
        target,
        layout: window.layout,
    });
}

/// Plan the config and run each operation in order on `mux`.
///
/// Each operation is waited on before the next starts. With
/// [`FailurePolicy::Continue`] every planned operation runs regardless of
/// earlier failures; nothing is rolled back.
pub fn apply<M: Multiplexer>(mux: &mut M, config: &Config, policy: FailurePolicy) -> Report {
    let ops = plan(config);
    let total = ops.len();
    let mut report = Report::default();

    for op in ops {
        debug!(%op, "executing");
        let outcome = mux.execute(&op);
        let failed = outcome.is_err();
        if let Err(ref e) = outcome {
            warn!(%op, error = %e, "tmux operation failed");
        }
        report.steps.push(Step { op, outcome });

        if failed && policy == FailurePolicy::Abort {
            report.skipped = total - report.steps.len();
            break;
        }
    }

    report
}
