//! Human-readable rendering of a loaded config.
//!
//! Printed before anything touches tmux, so the user sees what is about to
//! be built:
//!
//! ```text
//! Tmux Configuration:
//! Session: dev
//!   Window: editor
//!     Pane 1: vim
//!     Pane 2: make watch
//! ```

use crate::config::Config;
use std::fmt;

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tmux Configuration:")?;
        for session in &self.sessions {
            writeln!(f, "Session: {}", session.name)?;
            for window in &session.windows {
                writeln!(f, "  Window: {}", window.name)?;
                for (i, pane) in window.panes.iter().enumerate() {
                    writeln!(f, "    Pane {}: {}", i + 1, pane.command)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    #[test]
    fn test_render_nested_in_order() {
        let config = Config::from_toml(
            r#"
            [[sessions]]
            name = "dev"
            [[sessions.windows]]
            name = "editor"
            panes = ["vim", "make watch"]
            [[sessions.windows]]
            name = "shell"

            [[sessions]]
            name = "ops"
            [[sessions.windows]]
            name = "logs"
            panes = ["tail -f /var/log/syslog"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.to_string(),
            "Tmux Configuration:\n\
             Session: dev\n\
             \x20 Window: editor\n\
             \x20   Pane 1: vim\n\
             \x20   Pane 2: make watch\n\
             \x20 Window: shell\n\
             Session: ops\n\
             \x20 Window: logs\n\
             \x20   Pane 1: tail -f /var/log/syslog\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(Config::default().to_string(), "Tmux Configuration:\n");
    }
}
