//! Commit record type for Loghaul.
//!
//! [`CommitRecord`] is the single entity produced by the log parser and
//! consumed by the table loader.

mod record;

pub use record::CommitRecord;
