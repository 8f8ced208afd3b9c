//! Git log source for Loghaul.
//!
//! This crate produces the raw commit log text:
//! - [`GitLog`]: clones the repository if needed and runs `git log`
//! - [`FileSource`]: reads a previously captured log from a file or stdin

mod error;
mod repository;
mod source;

pub use error::{GitError, GitResult};
pub use repository::{GitLog, LOG_ARGS};
pub use source::{FileSource, LogSource};
