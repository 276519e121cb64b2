//! Cleaning summary returned to the presentation layer.

use serde::{Deserialize, Serialize};

/// Outcome summary for one cleaning invocation.
///
/// The caller (upload widget, batch driver) only needs counts and the
/// degraded-mode flags; the cleaned table itself travels separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    /// Rows parsed from the source file.
    pub rows_in: usize,
    /// Rows in the cleaned output.
    pub rows_out: usize,
    /// Malformed source lines that were skipped during parsing.
    pub skipped_lines: usize,
    /// Source columns that matched no canonical field and were passed through.
    pub passthrough_columns: Vec<String>,
    /// True when the locality reference was unavailable and locality fields
    /// fell back to generic title-casing.
    pub locality_degraded: bool,
}
