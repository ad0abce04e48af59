//! Attaching to the first configured session.
//!
//! Attach is idempotent: the session is probed first and only created when
//! tmux does not know it, so it works even if compilation failed or the
//! session was already running from an earlier invocation.

use crate::config::Config;
use crate::error::{Result, TmuxerError};
use crate::tmux::{Multiplexer, Operation};
use std::io::Write;
use tracing::{info, warn};

/// How the session was found before attaching.
#[derive(Debug)]
pub enum Ensured {
    /// tmux already had it; nothing was created.
    Present,
    /// It was missing (or the probe failed) and has been created.
    Created,
    /// It was missing and creating it failed.
    CreateFailed(TmuxerError),
}

/// Everything that happened while attaching.
#[derive(Debug)]
pub struct AttachReport {
    pub session: String,
    /// Probe error, if the probe itself could not run.
    pub probe_error: Option<TmuxerError>,
    pub ensured: Ensured,
    pub attached: Result<()>,
}

/// Attach the terminal to the first session in `config`.
///
/// Status lines go to `out` as they happen, since the attach itself blocks
/// until the user detaches. Does nothing and returns `None` for an empty
/// config. Failures are reported, never propagated.
pub fn attach_first<M: Multiplexer, W: Write>(
    mux: &mut M,
    config: &Config,
    out: &mut W,
) -> Option<AttachReport> {
    let session = config.first_session()?.name.clone();

    // Status output is best-effort; a closed stdout must not stop the attach.
    let _ = writeln!(out, "Attaching to the first session: {}", session);

    // A probe that cannot run counts as "absent".
    let (present, probe_error) = match mux.has_session(&session) {
        Ok(present) => (present, None),
        Err(e) => {
            warn!(%session, error = %e, "session probe failed");
            let _ = writeln!(out, "Could not check for session {}: {}", session, e);
            (false, Some(e))
        }
    };

    let ensured = if present {
        Ensured::Present
    } else {
        let _ = writeln!(out, "Session {} doesn't exist, creating it...", session);
        heal(mux, &session)
    };

    if let Ensured::CreateFailed(ref e) = ensured {
        let _ = writeln!(out, "Error creating session {}: {}", session, e);
    }
    let _ = out.flush();

    let attached = mux.attach(&session);
    if let Err(ref e) = attached {
        let _ = writeln!(out, "Error attaching to session: {}", e);
    }

    Some(AttachReport {
        session,
        probe_error,
        ensured,
        attached,
    })
}

/// Create a session that the probe reported missing.
fn heal<M: Multiplexer>(mux: &mut M, session: &str) -> Ensured {
    let op = Operation::NewSession {
        session: session.to_string(),
    };
    match mux.execute(&op) {
        Ok(()) => {
            info!(session, "created missing session");
            Ensured::Created
        }
        Err(e) => Ensured::CreateFailed(e),
    }
}
