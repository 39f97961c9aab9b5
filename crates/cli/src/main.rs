mod app;
mod commands;
mod error;
mod helpers;
mod session;

use app::{App as CLI, Commands, LogLevel};
use clap::Parser;
use session::CliSession;
use std::env;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// The binary crate itself is `julia_setup`
const LOG_TARGETS: [&str; 4] = ["julia_setup", "julia_setup_core", "system_env", "version_spec"];

fn initialize_tracing(level: LogLevel) {
    let filter = if matches!(level, LogLevel::Off) {
        EnvFilter::new("off")
    } else {
        let directives = LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",");

        EnvFilter::new(format!("warn,{directives}"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(env::var("NO_COLOR").is_err())
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = CLI::parse();

    initialize_tracing(cli.log.unwrap_or_default());

    debug!(
        args = ?env::args().collect::<Vec<_>>(),
        "Running julia-setup v{}",
        env!("CARGO_PKG_VERSION")
    );

    let session = CliSession::new(&cli)?;

    match cli.command {
        Commands::Install(args) => commands::install(&session, args).await,
        Commands::ListRemote(args) => commands::list_remote(&session, args).await,
        Commands::Resolve(args) => commands::resolve(&session, args).await,
    }
}
