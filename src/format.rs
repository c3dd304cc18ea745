//! Export format selection.
//!
//! Library-first format type without CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::core::table::Table;
//! use chatstats::format::{OutputFormat, to_format_string};
//!
//! let table = Table::new(["Date", "Messages"]);
//! let csv = to_format_string(&table, OutputFormat::Csv)?;
//! assert_eq!(csv.trim(), "Date,Messages");
//!
//! let format = OutputFormat::from_path("ranking.json")?;
//! assert_eq!(format, OutputFormat::Json);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::table::Table;
use crate::error::ChatstatsError;

/// Output format for exported tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Comma-delimited text with a header row
    #[default]
    Csv,

    /// Array of records keyed by column header
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatstatsError> {
        let ext = path
            .as_ref()
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ChatstatsError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json"),
            )),
        }
    }

    /// Name of the cargo feature that provides the writer.
    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a table to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    table: &Table,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), ChatstatsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(table, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(table, path),
        #[allow(unreachable_patterns)]
        _ => Err(disabled(format)),
    }
}

/// Converts a table to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(table: &Table, format: OutputFormat) -> Result<String, ChatstatsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(table),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(table),
        #[allow(unreachable_patterns)]
        _ => Err(disabled(format)),
    }
}

fn disabled(format: OutputFormat) -> ChatstatsError {
    ChatstatsError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.feature()
        ),
    )
}
