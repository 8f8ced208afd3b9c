//! Core library for Loghaul.
//!
//! This crate wires the log source, the parser and the table loader into
//! one fail-fast run.

mod error;
mod pipeline;

pub use error::{CoreError, CoreResult, ErrorKind};
pub use pipeline::{Pipeline, RunSummary};
