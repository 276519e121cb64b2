//! Flexible delimited-file reading.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use lead_model::Table;

use crate::error::IngestError;

/// Result of parsing one source file.
#[derive(Debug, Clone)]
pub struct ReadOutcome {
    pub table: Table,
    /// Malformed lines that were skipped during parsing.
    pub skipped_lines: usize,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn parse_with_delimiter(data: &[u8], delimiter: u8) -> (Vec<Vec<String>>, usize) {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(data);
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        match record {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(normalize_cell).collect();
                if row.iter().all(|cell| cell.is_empty()) {
                    continue;
                }
                rows.push(row);
            }
            Err(error) => {
                debug!(%error, "skipping malformed line");
                skipped += 1;
            }
        }
    }
    (rows, skipped)
}

/// Parses a delimited table from raw bytes.
///
/// The delimiter is detected by trial: comma first, retrying with a
/// semicolon when the comma parse yields one column or fewer. Headers are
/// trimmed after parse; fully blank lines are dropped; malformed lines are
/// counted and skipped.
pub fn read_table_from_slice(data: &[u8]) -> Result<ReadOutcome, IngestError> {
    let (mut rows, mut skipped) = parse_with_delimiter(data, b',');
    if rows.first().is_none_or(|header| header.len() <= 1) {
        let (alt_rows, alt_skipped) = parse_with_delimiter(data, b';');
        if alt_rows.first().is_some_and(|header| header.len() > 1) {
            rows = alt_rows;
            skipped = alt_skipped;
        }
    }
    let Some(header_row) = rows.first() else {
        return Err(IngestError::NotATable {
            message: "input contains no rows".to_string(),
        });
    };
    let mut table = Table::new(header_row.clone());
    for row in rows.iter().skip(1) {
        table.push_row(row.clone());
    }
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        skipped,
        "parsed source table"
    );
    Ok(ReadOutcome {
        table,
        skipped_lines: skipped,
    })
}

/// Reads a delimited table from disk. See [`read_table_from_slice`].
pub fn read_table(path: &Path) -> Result<ReadOutcome, IngestError> {
    let data = std::fs::read(path).map_err(|source| IngestError::io(path, source))?;
    read_table_from_slice(&data)
}
