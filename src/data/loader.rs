//! Loading match records from the results file
//!
//! The source is a semicolon-delimited table with one header row and one
//! match per subsequent row. The whole file is read up front and the handle
//! released before any analysis runs.

use crate::{MatchRecord, MatchdayError, Result};
use std::path::Path;

/// Load all match records from a results file.
///
/// Fails with a descriptive error when the file cannot be read at all, or
/// when any single row is malformed. There is no row-level recovery: the
/// analysis depends on every record being well-formed, so a bad row aborts
/// the entire load.
pub fn load_matches<P: AsRef<Path>>(path: P) -> Result<Vec<MatchRecord>> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|e| MatchdayError::SourceUnavailable {
            path: path.display().to_string(),
            source: e,
        })?;

    let records = records_from_lines(content.lines())?;
    log::info!("Loaded {} match records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse an ordered sequence of raw lines, header line first.
///
/// One line produces one record, in source order. The header line is skipped
/// and never parsed. The first malformed line aborts the load, carrying its
/// 1-based line number.
pub fn records_from_lines<'a, I>(lines: I) -> Result<Vec<MatchRecord>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        if idx == 0 {
            // header row
            continue;
        }
        let record = MatchRecord::from_line(line).map_err(|e| match e {
            MatchdayError::MalformedRecord(reason) => {
                MatchdayError::MalformedRecord(format!("line {}: {}", idx + 1, reason))
            }
            other => other,
        })?;
        records.push(record);
    }

    Ok(records)
}
