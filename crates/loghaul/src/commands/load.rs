//! Load command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use loghaul_config::Config;
use loghaul_core::{CoreError, Pipeline};
use loghaul_store::PostgresStore;
use tracing::info;

use super::log_source;

/// Arguments for the load command.
#[derive(Debug, Default, Args)]
pub struct LoadArgs {
    /// Read a captured log from a file (`-` for stdin) instead of running git
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Runs the load command.
///
/// The log is parsed completely before the database is contacted, so a
/// malformed log leaves the existing table untouched.
pub fn run(args: &LoadArgs, config: &Config) -> Result<()> {
    let db_url = config.db_url()?;
    let pipeline = Pipeline::new(log_source(args.input.as_deref(), config)?);

    let records = pipeline.parse()?;

    info!(
        db = %config.redacted_db_url().unwrap_or_default(),
        "connecting to database"
    );
    let mut store = PostgresStore::connect(db_url).map_err(CoreError::from)?;
    let summary = Pipeline::load(&records, &mut store)?;

    info!(rows = summary.rows, "commit table replaced");
    println!("done");
    Ok(())
}
