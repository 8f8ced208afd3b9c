//! Core error types.

use std::fmt;

use thiserror::Error;

/// A failed run, by the stage that failed.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The repository could not be cloned or its log could not be read.
    #[error("acquisition failed: {0}")]
    Acquisition(#[from] loghaul_git::GitError),

    /// The log does not have the expected structure.
    #[error("malformed commit log: {0}")]
    Format(#[from] loghaul_parser::ParseError),

    /// Resetting or filling the table failed.
    #[error("load failed: {0}")]
    Load(#[from] loghaul_store::StoreError),
}

impl CoreError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Acquisition(_) => ErrorKind::Acquisition,
            Self::Format(_) => ErrorKind::Format,
            Self::Load(_) => ErrorKind::Load,
        }
    }
}

/// Category of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Cloning or log retrieval failed.
    Acquisition,
    /// Parsing failed.
    Format,
    /// Database work failed.
    Load,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Acquisition => "acquisition",
            Self::Format => "format",
            Self::Load => "load",
        })
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
