//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use loghaul_config::{Config, config_from_env, load_config};
use tracing::debug;

use crate::commands;

/// Load the commit history of a git repository into a `PostgreSQL` table.
#[derive(Debug, Parser)]
#[command(name = "loghaul")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with fallback settings
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Settings that override the environment.
#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Database connection string [env: DB_URL]
    #[arg(long, global = true, value_name = "URL")]
    pub db_url: Option<String>,

    /// Remote to clone from when the working copy is absent [env: GIT_REPO]
    #[arg(long, global = true, value_name = "URL")]
    pub git_repo: Option<String>,

    /// Path of the working copy [env: WORK_PATH]
    #[arg(long, global = true, value_name = "PATH")]
    pub work_path: Option<PathBuf>,
}

impl SettingsArgs {
    fn to_config(&self) -> Config {
        let mut config = Config::new();
        if let Some(db_url) = &self.db_url {
            config = config.with_db_url(db_url);
        }
        if let Some(git_repo) = &self.git_repo {
            config = config.with_git_repo(git_repo);
        }
        if let Some(work_path) = &self.work_path {
            config = config.with_work_path(work_path);
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace the commit table with the parsed log (default)
    Load(commands::load::LoadArgs),

    /// Print the parsed log as JSON lines without touching the database
    Parse(commands::parse::ParseArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let config = self.resolve_config()?;
        debug!(?config, "resolved configuration");

        match self.command {
            Some(Commands::Load(args)) => commands::load::run(&args, &config),
            Some(Commands::Parse(args)) => commands::parse::run(&args, &config),
            None => commands::load::run(&commands::load::LoadArgs::default(), &config),
        }
    }

    /// Layers flags over the environment over the config file.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = self.settings.to_config().or(config_from_env());
        if let Some(path) = &self.config {
            config = config.or(load_config(path)?);
        }
        Ok(config)
    }
}
