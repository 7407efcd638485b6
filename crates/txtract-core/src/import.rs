//! Statement-level parsing: raw text in, transaction records out

use std::io::Read;

use tracing::debug;

use crate::error::Result;
use crate::extract::extract_record;
use crate::models::TransactionRecord;
use crate::segment::segment;

/// Split text into trimmed, non-empty lines
pub fn prepare_lines(text: &str) -> Vec<&str> {
    text.trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse a whole statement export.
///
/// The first malformed record aborts the parse; there is no partial result.
pub fn parse_statement(text: &str) -> Result<Vec<TransactionRecord>> {
    let lines = prepare_lines(text);

    let records = segment(&lines)
        .enumerate()
        .map(|(i, group)| {
            extract_record(group).inspect_err(|e| {
                debug!(record = i + 1, first_line = group[0], "Failed to parse record: {}", e)
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Parsed {} transactions from {} lines",
        records.len(),
        lines.len()
    );
    Ok(records)
}

/// Read a statement export fully, then parse it
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Vec<TransactionRecord>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    let text = String::from_utf8(buf)?;
    parse_statement(&text)
}
