//! Tmuxer CLI entry point.
//!
//! Loads the config, prints it, builds every session in tmux and attaches
//! to the first one.

use clap::Parser;
use tmuxer::cli::Cli;
use tmuxer::compiler;
use tmuxer::error::Result;
use tmuxer::{Tmux, attach, loader};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, on stdout.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Route `tracing` output to stderr; `TMUXER_LOG` takes precedence over `-v`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env("TMUXER_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    init_logging(cli.log_level());

    let config = loader::load(cli.config.as_deref())?;
    println!("{}", config);

    let mut tmux = Tmux::default();
    let policy = cli.policy();
    let report = compiler::apply(&mut tmux, &config, policy);
    // Status output is best-effort.
    let _ = report.write_summary(&mut std::io::stdout());
    report.finish(policy)?;

    attach::attach_first(&mut tmux, &config, &mut std::io::stdout());
    Ok(())
}
