//! Git log text parser for Loghaul.
//!
//! Turns the output of `git log --format=medium --date=iso-strict` into
//! [`CommitRecord`](loghaul_commit::CommitRecord)s in two passes:
//! - [`scan`] finds where each commit block starts and ends
//! - [`parse`] extracts the fields of every block
//!
//! Any malformed block fails the whole parse.

mod error;
mod parser;
mod scanner;

pub use error::{ParseError, ParseResult};
pub use parser::{AUTHOR_LABEL, DATE_LABEL, parse, parse_log, split_lines};
pub use scanner::{COMMIT_MARKER, CommitBlock, scan};
