//! Pipeline orchestration: map, standardize, sweep.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use lead_ingest::{ReadOutcome, read_table, read_table_from_slice};
use lead_model::{CanonicalField, CleanReport, Table};
use lead_standards::{LocalityFetcher, LocalityIndex, LocalityService, SegmentDictionary};
use lead_transform::{apply_rule, rule_for};

/// Cleaned table plus the invocation summary.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub table: Table,
    pub report: CleanReport,
}

/// Cleans an already-parsed table.
///
/// Pure given its inputs and re-entrant; the locality index and segment
/// dictionary are read-only.
pub fn clean(raw: &Table, index: &LocalityIndex, segments: &SegmentDictionary) -> Table {
    let (table, _) = clean_mapped(raw, index, segments);
    table
}

fn clean_mapped(
    raw: &Table,
    index: &LocalityIndex,
    segments: &SegmentDictionary,
) -> (Table, Vec<String>) {
    let mapped = crate::mapper::map_to_canonical(raw);
    let mut table = mapped.table;
    standardize_columns(&mut table, index, segments);
    null_sweep(&mut table);
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        passthrough = mapped.passthrough.len(),
        "cleaned table"
    );
    (table, mapped.passthrough)
}

/// Applies each canonical column's registered standardizer to every cell.
fn standardize_columns(table: &mut Table, index: &LocalityIndex, segments: &SegmentDictionary) {
    for (col_idx, header) in table.headers.iter().enumerate() {
        let Some(field) = CanonicalField::from_name(header) else {
            continue;
        };
        let Some(rule) = rule_for(field) else {
            continue;
        };
        for row in &mut table.rows {
            if let Some(cell) = row.get_mut(col_idx) {
                *cell = apply_rule(rule, cell, index, segments);
            }
        }
    }
}

/// Replaces any cell whose trimmed lower-case form is "nan" with an empty
/// string. CRM exports leak the literal text "nan" for missing values; the
/// output contract forbids it.
fn null_sweep(table: &mut Table) {
    for row in &mut table.rows {
        for cell in row {
            if cell.trim().eq_ignore_ascii_case("nan") {
                cell.clear();
            }
        }
    }
}

fn finish(outcome: ReadOutcome, index: &LocalityIndex, segments: &SegmentDictionary) -> CleanOutcome {
    let rows_in = outcome.table.row_count();
    let (table, passthrough) = clean_mapped(&outcome.table, index, segments);
    let report = CleanReport {
        rows_in,
        rows_out: table.row_count(),
        skipped_lines: outcome.skipped_lines,
        passthrough_columns: passthrough,
        locality_degraded: index.is_empty(),
    };
    CleanOutcome { table, report }
}

/// Reads, cleans, and summarizes one source file.
///
/// The locality index is taken from the service cache (fetched on first
/// use); a degraded index is reported, not fatal. Only an unreadable or
/// unparseable input is an error.
pub fn clean_file<F: LocalityFetcher>(
    path: &Path,
    service: &LocalityService<F>,
    segments: &SegmentDictionary,
) -> Result<CleanOutcome> {
    let outcome =
        read_table(path).with_context(|| format!("clean input {}", path.display()))?;
    let index = service.index();
    Ok(finish(outcome, &index, segments))
}

/// In-memory variant of [`clean_file`] for callers that hold the upload
/// bytes directly.
pub fn clean_slice<F: LocalityFetcher>(
    data: &[u8],
    service: &LocalityService<F>,
    segments: &SegmentDictionary,
) -> Result<CleanOutcome> {
    let outcome = read_table_from_slice(data).context("clean uploaded table")?;
    let index = service.index();
    Ok(finish(outcome, &index, segments))
}
