//! Lead data ingestion and export.
//!
//! Reading is deliberately forgiving: the delimiter is detected by trial
//! (comma first, semicolon on a one-column result), headers are trimmed,
//! and malformed lines are skipped and counted instead of aborting the run.
//! Only a structurally unreadable input is fatal.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::IngestError;
pub use reader::{ReadOutcome, read_table, read_table_from_slice};
pub use writer::{write_csv, write_csv_to};
