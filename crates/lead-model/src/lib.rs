//! Lead data model definitions.
//!
//! This crate holds the pieces every other crate depends on:
//!
//! - **schema**: the canonical 17-field output schema and header alias matching
//! - **table**: the in-memory tabular representation shared across the pipeline
//! - **text**: diacritic-insensitive comparison keys and title-casing rules
//! - **report**: the per-invocation cleaning summary returned to callers

pub mod report;
pub mod schema;
pub mod table;
pub mod text;

pub use report::CleanReport;
pub use schema::{
    CanonicalField, FIRST_NAME_PATTERNS, LAST_NAME_PATTERNS, match_header, matches_patterns,
    normalize_header,
};
pub use table::Table;
pub use text::{capitalize_word, comparison_key, title_case_with_exceptions};
