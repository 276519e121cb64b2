//! Semicolon-delimited CSV export with a UTF-8 byte-order mark.
//!
//! Regional spreadsheet tools (pt-BR Excel in particular) expect ';' as the
//! field separator and use the BOM to pick UTF-8 instead of a legacy code
//! page.

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use lead_model::Table;

use crate::error::IngestError;

const UTF8_BOM: &[u8] = "\u{feff}".as_bytes();

/// Writes the table to any sink as BOM-prefixed, semicolon-delimited CSV.
pub fn write_csv_to<W: Write>(table: &Table, mut sink: W) -> Result<(), IngestError> {
    sink.write_all(UTF8_BOM)?;
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(sink);
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the table to `path`. See [`write_csv_to`].
pub fn write_csv(table: &Table, path: &Path) -> Result<(), IngestError> {
    let file = std::fs::File::create(path)?;
    write_csv_to(table, file)
}
