//! Configuration schema.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::{ConfigError, ConfigResult};

/// Environment variable holding the database connection string.
pub const DB_URL_VAR: &str = "DB_URL";

/// Environment variable holding the remote to clone from.
pub const GIT_REPO_VAR: &str = "GIT_REPO";

/// Environment variable holding the working copy path.
pub const WORK_PATH_VAR: &str = "WORK_PATH";

/// Loghaul settings.
///
/// Every setting is required by the component that uses it and has no
/// default; blank values count as missing.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection string.
    db_url: Option<String>,

    /// Remote location, used only when the working copy is absent.
    git_repo: Option<String>,

    /// Local working copy path.
    work_path: Option<PathBuf>,
}

impl Config {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from variables resolved by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            db_url: lookup(DB_URL_VAR),
            git_repo: lookup(GIT_REPO_VAR),
            work_path: lookup(WORK_PATH_VAR).map(PathBuf::from),
        }
    }

    /// Sets the database connection string.
    #[must_use]
    pub fn with_db_url(mut self, db_url: impl Into<String>) -> Self {
        self.db_url = Some(db_url.into());
        self
    }

    /// Sets the remote location.
    #[must_use]
    pub fn with_git_repo(mut self, git_repo: impl Into<String>) -> Self {
        self.git_repo = Some(git_repo.into());
        self
    }

    /// Sets the working copy path.
    #[must_use]
    pub fn with_work_path(mut self, work_path: impl Into<PathBuf>) -> Self {
        self.work_path = Some(work_path.into());
        self
    }

    /// Fills every unset or blank setting from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Config) -> Self {
        Self {
            db_url: non_blank(self.db_url).or(non_blank(fallback.db_url)),
            git_repo: non_blank(self.git_repo).or(non_blank(fallback.git_repo)),
            work_path: non_blank_path(self.work_path).or(non_blank_path(fallback.work_path)),
        }
    }

    /// Returns the database connection string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if it is unset or blank.
    pub fn db_url(&self) -> ConfigResult<&str> {
        required(self.db_url.as_deref(), DB_URL_VAR)
    }

    /// Returns the remote location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if it is unset or blank.
    pub fn git_repo(&self) -> ConfigResult<&str> {
        required(self.git_repo.as_deref(), GIT_REPO_VAR)
    }

    /// Returns the working copy path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if it is unset or empty.
    pub fn work_path(&self) -> ConfigResult<&Path> {
        match self.work_path.as_deref() {
            Some(path) if !path.as_os_str().is_empty() => Ok(path),
            _ => Err(ConfigError::Missing(WORK_PATH_VAR)),
        }
    }

    /// Returns the database connection string with its password hidden,
    /// suitable for logs.
    pub fn redacted_db_url(&self) -> Option<String> {
        self.db_url.as_deref().map(redact)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_url", &self.redacted_db_url())
            .field("git_repo", &self.git_repo)
            .field("work_path", &self.work_path)
            .finish()
    }
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> ConfigResult<&'a str> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_blank_path(value: Option<PathBuf>) -> Option<PathBuf> {
    value.filter(|v| !v.as_os_str().is_empty())
}

/// URL connection strings keep everything but the password; key/value
/// connection strings are hidden entirely.
fn redact(db_url: &str) -> String {
    match Url::parse(db_url) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) => "<redacted>".to_string(),
    }
}
