//! Store error types.

use thiserror::Error;

/// Errors raised while loading the table.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database connection could not be opened.
    #[error("failed to connect to database: {0}")]
    Connect(#[source] postgres::Error),

    /// Dropping or creating the table failed.
    #[error("failed to reset commit table: {0}")]
    Schema(#[source] postgres::Error),

    /// The bulk transfer failed.
    #[error("bulk transfer into commit table failed: {0}")]
    Transfer(#[source] postgres::Error),

    /// The server acknowledged a different number of rows than were sent.
    #[error("bulk transfer wrote {written} rows, expected {expected}")]
    RowCount {
        /// Rows sent.
        expected: u64,
        /// Rows acknowledged by the server.
        written: u64,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_display() {
        let err = StoreError::RowCount {
            expected: 10,
            written: 7,
        };
        assert_eq!(err.to_string(), "bulk transfer wrote 7 rows, expected 10");
    }

    #[test]
    fn test_error_is_debug() {
        let err = StoreError::RowCount {
            expected: 1,
            written: 0,
        };
        assert!(format!("{err:?}").contains("RowCount"));
    }
}
