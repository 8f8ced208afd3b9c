//! Log source abstraction.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{GitError, GitResult};

/// Something that yields the raw commit log text.
///
/// The text must be in `git log --format=medium --date=iso-strict` shape.
pub trait LogSource {
    /// Returns the full commit log.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be obtained.
    fn fetch(&self) -> GitResult<String>;
}

/// Reads a previously captured log from a file, or stdin for `-`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

impl LogSource for FileSource {
    fn fetch(&self) -> GitResult<String> {
        debug!(path = ?self.path, "reading captured log");

        let bytes = if self.is_stdin() {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf).map(|_| buf)
        } else {
            std::fs::read(&self.path)
        }
        .map_err(|source| GitError::Read {
            path: self.path.clone(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|source| GitError::InvalidUtf8 {
            path: self.path.clone(),
            source,
        })
    }
}
