//! Table writers for the export collaborator.
//!
//! - [`write_csv`] / [`to_csv`] - comma-delimited with a header row - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty JSON array of records keyed by header - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::core::output::{to_csv, write_json};
//! use chatstats::core::table::Table;
//!
//! let mut table = Table::new(["Participant", "Messages"]);
//! table.push_row(vec!["Alice".into(), 3usize.into()]);
//!
//! let csv_string = to_csv(&table)?;
//! write_json(&table, "ranking.json")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
