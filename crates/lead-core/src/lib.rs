//! Lead cleaning pipeline.
//!
//! The stages run in a fixed order:
//!
//! 1. **Ingest**: parse the delimited source file (`lead-ingest`)
//! 2. **Map**: rename and reshape source columns onto the canonical schema,
//!    deriving `Nome_Contato` from the first/last-name sources
//! 3. **Standardize**: apply the registered rule to every cell of each
//!    canonical column (`lead-transform`)
//! 4. **Sweep**: replace null-equivalent tokens with empty strings
//!
//! Per-cell failures resolve to each standardizer's fallback value; only a
//! structurally unparseable input aborts an invocation.

pub mod mapper;
pub mod pipeline;

pub use mapper::{MappedTable, map_to_canonical};
pub use pipeline::{CleanOutcome, clean, clean_file, clean_slice};
