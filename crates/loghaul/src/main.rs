//! Loghaul CLI - Load a repository's commit history into a database table.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn main() -> Result<()> {
    // Variables from .env never override the real environment
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();

    // Initialize logging on stderr; stdout carries results only
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
