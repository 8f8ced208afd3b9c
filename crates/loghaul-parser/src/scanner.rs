//! Commit block boundary detection.

use std::collections::HashSet;

use tracing::debug;

use crate::{ParseError, ParseResult};

/// The token that starts every commit block.
pub const COMMIT_MARKER: &str = "commit";

/// The span of one commit in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitBlock {
    /// Index of the marker line.
    pub start: usize,

    /// Exclusive end index: the next marker line, or the line count.
    pub end: usize,

    /// The identifier following the marker.
    pub id: String,
}

/// Finds every commit block in `lines`, in log order.
///
/// A line starts a block only if it begins, at column 0, with
/// [`COMMIT_MARKER`] followed by a space. The identifier is the first
/// whitespace-delimited token after it; anything after that (decorations)
/// is ignored. Message lines are indented by git, so identifiers quoted in
/// a message never start a block.
///
/// # Errors
///
/// Returns an error if a marker line has no identifier, if the marker is
/// followed by other whitespace than a space, if non-blank text precedes
/// the first marker, or if an identifier is repeated.
pub fn scan(lines: &[&str]) -> ParseResult<Vec<CommitBlock>> {
    let mut blocks: Vec<CommitBlock> = Vec::new();
    let mut seen = HashSet::new();

    for (idx, line) in lines.iter().enumerate() {
        match classify(line) {
            Line::Marker(id) => {
                if !seen.insert(id) {
                    return Err(ParseError::DuplicateCommit {
                        commit: id.to_string(),
                    });
                }
                if let Some(prev) = blocks.last_mut() {
                    prev.end = idx;
                }
                blocks.push(CommitBlock {
                    start: idx,
                    end: lines.len(),
                    id: id.to_string(),
                });
            }
            Line::BareMarker => return Err(ParseError::MissingIdentifier { line: idx + 1 }),
            Line::MalformedMarker => return Err(ParseError::MalformedMarker { line: idx + 1 }),
            Line::Other if blocks.is_empty() && !line.trim().is_empty() => {
                return Err(ParseError::UnexpectedPreamble { line: idx + 1 });
            }
            Line::Other => {}
        }
    }

    debug!(blocks = blocks.len(), lines = lines.len(), "scanned commit log");
    Ok(blocks)
}

enum Line<'a> {
    Marker(&'a str),
    BareMarker,
    MalformedMarker,
    Other,
}

fn classify(line: &str) -> Line<'_> {
    let Some(rest) = line.strip_prefix(COMMIT_MARKER) else {
        return Line::Other;
    };
    if rest.trim().is_empty() {
        return Line::BareMarker;
    }
    match rest.strip_prefix(' ') {
        Some(tail) => tail.split_whitespace().next().map_or(Line::BareMarker, Line::Marker),
        None if rest.starts_with(char::is_whitespace) => Line::MalformedMarker,
        None => Line::Other,
    }
}
