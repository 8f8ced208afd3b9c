//! A single commit extracted from the log.

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};

/// A commit as extracted from the log text.
///
/// Records are built only once every field has been validated, and are
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    /// The commit identifier (SHA).
    commit_id: String,

    /// The `Name <email>` text from the author line.
    author: String,

    /// The author date, keeping the offset it was written with.
    #[serde(serialize_with = "serialize_timestamp")]
    timestamp: DateTime<FixedOffset>,

    /// The message with indentation stripped. May be empty.
    body: String,
}

impl CommitRecord {
    /// Creates a new commit record.
    #[must_use]
    pub fn new(
        commit_id: impl Into<String>,
        author: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            commit_id: commit_id.into(),
            author: author.into(),
            timestamp,
            body: body.into(),
        }
    }

    /// Returns the commit identifier.
    pub fn commit_id(&self) -> &str {
        &self.commit_id
    }

    /// Returns the author text.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the commit timestamp.
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the first line of the body (the subject).
    pub fn subject(&self) -> &str {
        self.body.lines().next().unwrap_or("")
    }

    /// Returns the short identifier (first 7 characters).
    pub fn short_id(&self) -> &str {
        self.commit_id
            .char_indices()
            .nth(7)
            .map_or(self.commit_id.as_str(), |(idx, _)| &self.commit_id[..idx])
    }
}

/// Writes the timestamp as RFC 3339 with a numeric offset, so a zero
/// offset stays `+00:00` instead of becoming `Z`.
fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339())
}
