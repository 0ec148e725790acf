//! Entry point for pocketsmith, a write-protected CLI for the PocketSmith API.
//!
//! This binary loads environment variables, sets up logging, parses CLI
//! arguments via [`cli`], and exits with the code the output layer chose.

mod api;
mod cli;
mod command;
mod config;
mod constants;
mod credentials;
mod error;
mod output;
mod params;
mod permissions;
mod transport;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Runs the pocketsmith CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments into a [`cli::Cli`] struct, and runs the chosen subcommand via
/// [`cli::run`].
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = cli::parse();
    ExitCode::from(cli::run(cli).await)
}

/// Diagnostics go to stderr and stay off unless `POCKETSMITH_LOG` asks for them.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
