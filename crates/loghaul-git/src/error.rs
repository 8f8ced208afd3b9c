//! Git error types.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised while obtaining the commit log.
#[derive(Debug, Error)]
pub enum GitError {
    /// The work path exists but is not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(PathBuf),

    /// `git clone` exited unsuccessfully.
    #[error("failed to clone {remote} into {path} ({status}): {stderr}")]
    CloneFailed {
        /// Remote location.
        remote: String,
        /// Destination path.
        path: PathBuf,
        /// Exit status of git.
        status: ExitStatus,
        /// Captured standard error.
        stderr: String,
    },

    /// `git log` exited unsuccessfully.
    #[error("failed to read log of {path} ({status}): {stderr}")]
    LogFailed {
        /// Repository path.
        path: PathBuf,
        /// Exit status of git.
        status: ExitStatus,
        /// Captured standard error.
        stderr: String,
    },

    /// The git executable could not be started.
    #[error("failed to run git: {0}")]
    Spawn(#[source] std::io::Error),

    /// The log is not valid UTF-8.
    #[error("log output of {path} is not valid UTF-8")]
    InvalidUtf8 {
        /// Repository or file path.
        path: PathBuf,
        /// Underlying conversion error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A captured log could not be read.
    #[error("failed to read log from {path}: {source}")]
    Read {
        /// File path (`-` for stdin).
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
