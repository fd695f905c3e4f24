//! `weir`: interactive menu over a fixed-size pool of squares.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use weir_arena::PoolConfig;
use weir_cli::Session;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Arena size in bytes for the list's node pool.
    #[arg(long, default_value_t = 500)]
    capacity_bytes: usize,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = PoolConfig::new(cli.capacity_bytes);
    info!(capacity_bytes = config.capacity_bytes, "starting session");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = match Session::new(stdin, stdout, config) {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, capacity_bytes = config.capacity_bytes, "cannot reserve arena");
            eprintln!("weir: cannot reserve a {}-byte arena: {e}", config.capacity_bytes);
            return ExitCode::FAILURE;
        }
    };
    match session.run() {
        Ok(()) => {
            info!(remaining = session.list().len(), "session ended");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "session aborted");
            ExitCode::FAILURE
        }
    }
}
