//! Configuration management for Loghaul.
//!
//! Settings come from CLI flags, the environment and an optional TOML file.
//! Each source produces a [`Config`]; [`Config::or`] layers them, and the
//! accessors report a missing key only when a component actually needs it.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{config_from_env, load_config};
pub use schema::{Config, DB_URL_VAR, GIT_REPO_VAR, WORK_PATH_VAR};
