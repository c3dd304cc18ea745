//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::table::Table;
use crate::error::{ChatstatsError, Result};

/// Writes a table to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - First row: column headers
/// - Floats with one decimal place
/// - Encoding: UTF-8
pub fn write_csv(table: &Table, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(table, file)
}

/// Converts a table to a CSV string.
pub fn to_csv(table: &Table) -> Result<String> {
    let mut buf = Vec::new();
    write_records(table, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ChatstatsError::unreadable("csv output", e.to_string()))
}

fn write_records<W: Write>(table: &Table, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b',').from_writer(out);

    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }

    writer.flush()?;
    Ok(())
}
