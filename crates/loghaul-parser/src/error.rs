//! Parse error types.

use thiserror::Error;

/// Log parsing errors.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A marker line without an identifier after it.
    #[error("line {line}: commit marker without an identifier")]
    MissingIdentifier {
        /// Line of the marker.
        line: usize,
    },

    /// A marker followed by whitespace other than a single space.
    #[error("line {line}: commit marker must be followed by a space")]
    MalformedMarker {
        /// Line of the marker.
        line: usize,
    },

    /// Text before the first commit marker.
    #[error("line {line}: unexpected text before the first commit")]
    UnexpectedPreamble {
        /// Offending line.
        line: usize,
    },

    /// A block too short to hold its header lines.
    #[error("commit {commit}: block ends at line {line} before the {expected} line")]
    TruncatedBlock {
        /// Commit identifier.
        commit: String,
        /// Last line of the block.
        line: usize,
        /// The header label that was still expected.
        expected: &'static str,
    },

    /// A header line without its expected label.
    #[error("commit {commit}: line {line}: expected `{expected}` line, found {found:?}")]
    UnexpectedLine {
        /// Commit identifier.
        commit: String,
        /// Offending line.
        line: usize,
        /// The expected label.
        expected: &'static str,
        /// The line as found, without its terminator.
        found: String,
    },

    /// A date line whose value is not an ISO-8601 timestamp with offset.
    #[error("commit {commit}: line {line}: invalid date {value:?}: {source}")]
    InvalidDate {
        /// Commit identifier.
        commit: String,
        /// Offending line.
        line: usize,
        /// The date text.
        value: String,
        /// Underlying chrono error.
        #[source]
        source: chrono::ParseError,
    },

    /// The same identifier appears in two blocks.
    #[error("commit {commit} appears more than once in the log")]
    DuplicateCommit {
        /// Commit identifier.
        commit: String,
    },
}

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_missing_identifier_display() {
        let err = ParseError::MissingIdentifier { line: 12 };
        assert_snapshot!(err.to_string(), @"line 12: commit marker without an identifier");
    }

    #[test]
    fn test_malformed_marker_display() {
        let err = ParseError::MalformedMarker { line: 4 };
        assert_snapshot!(err.to_string(), @"line 4: commit marker must be followed by a space");
    }

    #[test]
    fn test_truncated_block_display() {
        let err = ParseError::TruncatedBlock {
            commit: "abc123".to_string(),
            line: 2,
            expected: "Date:",
        };
        assert_snapshot!(
            err.to_string(),
            @"commit abc123: block ends at line 2 before the Date: line"
        );
    }

    #[test]
    fn test_unexpected_line_display() {
        let err = ParseError::UnexpectedLine {
            commit: "abc123".to_string(),
            line: 2,
            expected: "Author:",
            found: "Merge: a1 b2".to_string(),
        };
        assert_snapshot!(
            err.to_string(),
            @r#"commit abc123: line 2: expected `Author:` line, found "Merge: a1 b2""#
        );
    }

    #[test]
    fn test_duplicate_commit_display() {
        let err = ParseError::DuplicateCommit {
            commit: "abc123".to_string(),
        };
        assert_eq!(err.to_string(), "commit abc123 appears more than once in the log");
    }

    #[test]
    fn test_invalid_date_has_source() {
        let source = chrono::DateTime::parse_from_rfc3339("yesterday").unwrap_err();
        let err = ParseError::InvalidDate {
            commit: "abc123".to_string(),
            line: 3,
            value: "yesterday".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with(r#"commit abc123: line 3: invalid date "yesterday""#));
    }
}
