//! Schema mapping: rename, reshape, and derive.

use std::collections::BTreeMap;

use tracing::debug;

use lead_model::{
    CanonicalField, FIRST_NAME_PATTERNS, LAST_NAME_PATTERNS, Table, match_header,
    matches_patterns, normalize_header,
};
use lead_transform::contact_name;

/// Result of mapping a raw table onto the canonical schema.
#[derive(Debug, Clone)]
pub struct MappedTable {
    /// The reshaped table: the 17 canonical columns in fixed order, then
    /// any passthrough columns in first-seen order.
    pub table: Table,
    /// Headers of source columns that matched no canonical field.
    pub passthrough: Vec<String>,
}

/// Maps source columns onto the canonical schema.
///
/// Every canonical column is present in the output, empty when no source
/// column matched its aliases. The first-name and last-name source columns
/// are consumed into a derived `Nome_Contato`; when a source column maps
/// directly onto `Nome_Contato` the direct value wins and no derivation
/// happens. Duplicate alias matches and unrecognized columns are appended
/// after the canonical block so no source data is silently dropped.
pub fn map_to_canonical(raw: &Table) -> MappedTable {
    let normalized: Vec<String> = raw
        .headers
        .iter()
        .map(|header| normalize_header(header))
        .collect();

    let first_idx = normalized
        .iter()
        .position(|header| matches_patterns(header, FIRST_NAME_PATTERNS));
    let last_idx = normalized
        .iter()
        .position(|header| matches_patterns(header, LAST_NAME_PATTERNS));

    let mut sources: BTreeMap<CanonicalField, usize> = BTreeMap::new();
    let mut passthrough_indices: Vec<usize> = Vec::new();
    for (idx, header) in normalized.iter().enumerate() {
        if Some(idx) == first_idx || Some(idx) == last_idx {
            continue;
        }
        match match_header(header) {
            Some(field) => {
                if sources.contains_key(&field) {
                    debug!(column = %raw.headers[idx], %field, "duplicate alias; passing through");
                    passthrough_indices.push(idx);
                } else {
                    sources.insert(field, idx);
                }
            }
            None => passthrough_indices.push(idx),
        }
    }

    let derive_name = first_idx.is_some() && !sources.contains_key(&CanonicalField::NomeContato);

    let passthrough: Vec<String> = passthrough_indices
        .iter()
        .map(|&idx| raw.headers[idx].clone())
        .collect();
    let mut headers: Vec<String> = CanonicalField::ALL
        .iter()
        .map(|field| field.as_str().to_string())
        .collect();
    headers.extend(passthrough.iter().cloned());

    let mut table = Table::new(headers);
    for row in &raw.rows {
        let cell = |idx: usize| row.get(idx).map_or("", String::as_str);
        let mut cells = Vec::with_capacity(table.headers.len());
        for field in CanonicalField::ALL {
            let value = if field == CanonicalField::NomeContato && derive_name {
                let first = first_idx.map_or("", &cell);
                let last = last_idx.map_or("", &cell);
                contact_name(first, last)
            } else {
                sources
                    .get(&field)
                    .map_or_else(String::new, |&idx| cell(idx).to_string())
            };
            cells.push(value);
        }
        for &idx in &passthrough_indices {
            cells.push(cell(idx).to_string());
        }
        table.rows.push(cells);
    }

    MappedTable { table, passthrough }
}
