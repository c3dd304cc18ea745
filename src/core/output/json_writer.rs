//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::table::{Cell, Table};
use crate::error::Result;

/// One row serialized as an object whose keys follow the header order.
struct Record<'a> {
    headers: &'a [String],
    cells: &'a [Cell],
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (header, cell) in self.headers.iter().zip(self.cells) {
            map.serialize_entry(header, cell)?;
        }
        map.end()
    }
}

/// Writes a table to a JSON file as an array of records.
///
/// # Format
/// ```json
/// [
///   {"Participant": "Alice", "Messages": 2},
///   {"Participant": "Bob", "Messages": 1}
/// ]
/// ```
pub fn write_json(table: &Table, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(table)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a table to a pretty-printed JSON array of records.
pub fn to_json(table: &Table) -> Result<String> {
    let records: Vec<Record<'_>> = table
        .rows()
        .iter()
        .map(|cells| Record {
            headers: table.headers(),
            cells,
        })
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample() -> Table {
        let mut table = Table::new(["Participant", "Messages", "Average length"]);
        table.push_row(vec!["Alice".into(), 2usize.into(), Cell::Float(4.5)]);
        table
    }

    #[test]
    fn test_to_json_records() {
        let json = to_json(&sample()).unwrap();
        assert!(json.contains(r#""Participant": "Alice""#));
        assert!(json.contains(r#""Messages": 2"#));
        assert!(json.contains(r#""Average length": 4.5"#));
    }

    #[test]
    fn test_keys_follow_header_order() {
        let json = to_json(&sample()).unwrap();
        let p = json.find("Participant").unwrap();
        let m = json.find("Messages").unwrap();
        let a = json.find("Average length").unwrap();
        assert!(p < m && m < a);
    }

    #[test]
    fn test_write_json_parses_back() {
        let temp_file = NamedTempFile::new().unwrap();
        write_json(&sample(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value[0]["Participant"], "Alice");
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_table_is_empty_array() {
        assert_eq!(to_json(&Table::new(["Date"])).unwrap(), "[]");
    }
}
