//! Commit log retrieval through the git executable.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use git2::{ErrorCode, Repository as Git2Repo};
use tracing::{debug, info};

use crate::{GitError, GitResult, LogSource};

/// Arguments given to `git` to print the log.
///
/// Decorations, colors and signatures are disabled so user configuration
/// cannot change the shape of the marker and header lines.
pub const LOG_ARGS: &[&str] = &[
    "--no-pager",
    "log",
    "--date=iso-strict",
    "--format=medium",
    "--no-decorate",
    "--no-color",
    "--no-show-signature",
];

/// A working copy whose log is read with the git executable.
#[derive(Debug, Clone)]
pub struct GitLog {
    remote: String,
    work_path: PathBuf,
}

impl GitLog {
    /// Creates a log source for `work_path`, cloned from `remote` if absent.
    #[must_use]
    pub fn new(remote: impl Into<String>, work_path: impl Into<PathBuf>) -> Self {
        Self {
            remote: remote.into(),
            work_path: work_path.into(),
        }
    }

    /// Returns the remote location.
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Returns the working copy path.
    pub fn work_path(&self) -> &Path {
        &self.work_path
    }

    /// Clones the remote into the work path unless the path already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if cloning fails or the existing path is not a
    /// git repository.
    pub fn ensure_clone(&self) -> GitResult<()> {
        if self.work_path.exists() {
            debug!(path = ?self.work_path, "work path exists, skipping clone");
            Git2Repo::open(&self.work_path)
                .map_err(|_| GitError::NotARepo(self.work_path.clone()))?;
            return Ok(());
        }

        info!(remote = %self.remote, path = ?self.work_path, "cloning repository");
        let output = Command::new("git")
            .args(["clone", "--"])
            .arg(&self.remote)
            .arg(&self.work_path)
            .output()
            .map_err(GitError::Spawn)?;

        if !output.status.success() {
            return Err(GitError::CloneFailed {
                remote: self.remote.clone(),
                path: self.work_path.clone(),
                status: output.status,
                stderr: stderr_of(&output),
            });
        }
        Ok(())
    }

    /// Runs `git log` in the work path and returns its output.
    ///
    /// A repository without commits yields an empty log.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a repository, git fails, or the
    /// output is not UTF-8.
    pub fn log(&self) -> GitResult<String> {
        if !self.has_commits()? {
            info!(path = ?self.work_path, "repository has no commits");
            return Ok(String::new());
        }

        let output = Command::new("git")
            .args(LOG_ARGS)
            .current_dir(&self.work_path)
            .output()
            .map_err(GitError::Spawn)?;

        if !output.status.success() {
            return Err(GitError::LogFailed {
                path: self.work_path.clone(),
                status: output.status,
                stderr: stderr_of(&output),
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|source| GitError::InvalidUtf8 {
            path: self.work_path.clone(),
            source,
        })?;
        debug!(bytes = text.len(), "read commit log");
        Ok(text)
    }

    fn has_commits(&self) -> GitResult<bool> {
        let repo = Git2Repo::open(&self.work_path)
            .map_err(|_| GitError::NotARepo(self.work_path.clone()))?;
        match repo.head() {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::UnbornBranch => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl LogSource for GitLog {
    fn fetch(&self) -> GitResult<String> {
        self.ensure_clone()?;
        self.log()
    }
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}
