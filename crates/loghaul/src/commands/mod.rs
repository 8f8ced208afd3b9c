//! CLI commands.

pub mod load;
pub mod parse;

use std::path::Path;

use anyhow::Result;
use loghaul_config::Config;
use loghaul_git::{FileSource, GitLog, LogSource};

/// Picks the captured log at `input`, or the configured repository.
fn log_source(input: Option<&Path>, config: &Config) -> Result<Box<dyn LogSource>> {
    match input {
        Some(path) => Ok(Box::new(FileSource::new(path))),
        None => Ok(Box::new(GitLog::new(
            config.git_repo()?,
            config.work_path()?,
        ))),
    }
}
