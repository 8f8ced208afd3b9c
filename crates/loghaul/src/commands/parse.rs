//! Parse command.

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use loghaul_commit::CommitRecord;
use loghaul_config::Config;
use loghaul_core::Pipeline;

use super::log_source;

/// Arguments for the parse command.
#[derive(Debug, Default, Args)]
pub struct ParseArgs {
    /// Read a captured log from a file (`-` for stdin) instead of running git
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Runs the parse command.
pub fn run(args: &ParseArgs, config: &Config) -> Result<()> {
    let pipeline = Pipeline::new(log_source(args.input.as_deref(), config)?);
    let records = pipeline.parse()?;

    let stdout = std::io::stdout();
    write_json_lines(&mut BufWriter::new(stdout.lock()), &records)
}

fn write_json_lines(out: &mut impl Write, records: &[CommitRecord]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
