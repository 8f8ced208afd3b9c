//! Commit table loader for Loghaul.
//!
//! The [`CommitStore`] trait is the seam between the pipeline and the
//! database; [`PostgresStore`] replaces the `commit` table wholesale using
//! the binary `COPY` protocol.

mod error;
mod pg;
mod schema;

pub use error::{StoreError, StoreResult};
pub use pg::PostgresStore;
pub use schema::{COPY_STATEMENT, COPY_TYPES, CREATE_TABLE, DROP_TABLE, TABLE_NAME};

use loghaul_commit::CommitRecord;

/// Destination of the parsed commits.
pub trait CommitStore {
    /// Drops the destination table if present and creates it empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be reset.
    fn reset(&mut self) -> StoreResult<()>;

    /// Streams every record into the table, in order, and returns the
    /// number of rows written.
    ///
    /// # Errors
    ///
    /// Returns an error if the transfer fails.
    fn load(&mut self, records: &[CommitRecord]) -> StoreResult<u64>;
}
