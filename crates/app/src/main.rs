//! Tukija - Main Entry Point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tukija::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so command output stays clean on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!("Starting Tukija v{}", env!("CARGO_PKG_VERSION"));

    match tukija::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_interrupted() => {
            tracing::info!("Interrupted");
            ExitCode::from(130)
        }
        Err(e) => {
            tracing::error!(error = %e, "Tukija failed");
            ExitCode::FAILURE
        }
    }
}
