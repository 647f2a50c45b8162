//! Strictly Console - random number guessing game
//!
//! Usage: `strictly_console [-min MIN] [-max MAX] [-tries TRIES] [-help]`

#![warn(missing_docs)]

use std::io;

use anyhow::Result;
use strictly_guessing::StdRandom;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let arguments: Vec<String> = std::env::args().skip(1).collect();
    info!(?arguments, "Starting random number game");

    strictly_console::run(
        &arguments,
        io::stdin().lock(),
        io::stdout().lock(),
        StdRandom::from_entropy(),
    )
}

/// Logs go to stderr so stdout carries only game text.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
