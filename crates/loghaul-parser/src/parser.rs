//! Commit field extraction.

use chrono::DateTime;
use loghaul_commit::CommitRecord;
use tracing::{debug, info};

use crate::{CommitBlock, ParseError, ParseResult, scan};

/// Label of the line following the marker.
pub const AUTHOR_LABEL: &str = "Author:";

/// Label of the line following the author line.
pub const DATE_LABEL: &str = "Date:";

/// Splits log text into lines, keeping their terminators.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Parses raw log text into commit records.
///
/// # Errors
///
/// Returns the first scan or parse error encountered.
pub fn parse_log(text: &str) -> ParseResult<Vec<CommitRecord>> {
    let lines = split_lines(text);
    let blocks = scan(&lines)?;
    parse(&lines, &blocks)
}

/// Extracts one record per block, in block order.
///
/// Each block must be laid out as the marker line, an [`AUTHOR_LABEL`]
/// line, a [`DATE_LABEL`] line holding an RFC 3339 timestamp, then any
/// number of message lines. Message lines are stripped of leading
/// whitespace and concatenated, and the result is trimmed.
///
/// # Errors
///
/// Returns an error for the first malformed block; no records are
/// returned in that case.
pub fn parse(lines: &[&str], blocks: &[CommitBlock]) -> ParseResult<Vec<CommitRecord>> {
    let records = blocks
        .iter()
        .map(|block| parse_block(lines, block))
        .collect::<ParseResult<Vec<_>>>()?;

    info!(commits = records.len(), "parsed commit log");
    Ok(records)
}

fn parse_block(lines: &[&str], block: &CommitBlock) -> ParseResult<CommitRecord> {
    let author = header(lines, block, 1, AUTHOR_LABEL)?;
    let date = header(lines, block, 2, DATE_LABEL)?;

    let timestamp = DateTime::parse_from_rfc3339(date).map_err(|source| ParseError::InvalidDate {
        commit: block.id.clone(),
        line: block.start + 3,
        value: date.to_string(),
        source,
    })?;

    let body = lines.get(block.start + 3..block.end).unwrap_or_default();
    let body = body.iter().map(|line| line.trim_start()).collect::<String>();

    let record = CommitRecord::new(block.id.as_str(), author, timestamp, body.trim());
    debug!(commit = %record.short_id(), subject = %record.subject(), "parsed commit");
    Ok(record)
}

/// Returns the trimmed value of the header `offset` lines below the marker.
fn header<'a>(
    lines: &[&'a str],
    block: &CommitBlock,
    offset: usize,
    label: &'static str,
) -> ParseResult<&'a str> {
    let idx = block.start + offset;
    let line = lines
        .get(idx)
        .copied()
        .filter(|_| idx < block.end)
        .ok_or_else(|| ParseError::TruncatedBlock {
            commit: block.id.clone(),
            line: block.end,
            expected: label,
        })?;

    let line = line.trim_end_matches(['\r', '\n']);
    line.strip_prefix(label)
        .map(str::trim)
        .ok_or_else(|| ParseError::UnexpectedLine {
            commit: block.id.clone(),
            line: idx + 1,
            expected: label,
            found: line.to_string(),
        })
}
