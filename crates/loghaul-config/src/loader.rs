//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Loads configuration from the TOML file at `path`.
///
/// The file may set any of `db_url`, `git_repo` and `work_path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    Ok(config)
}

/// Reads `DB_URL`, `GIT_REPO` and `WORK_PATH` from the process environment.
pub fn config_from_env() -> Config {
    Config::from_lookup(|key| std::env::var(key).ok())
}
