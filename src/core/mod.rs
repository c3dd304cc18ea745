//! Core processing logic for chatstats.
//!
//! This module contains:
//! - [`store`] - Merged message collection and filter-population accessors
//! - [`filter`] - Filter criteria by group, sender and date range
//! - [`stats`] - Rankings, detail rows, daily timeseries and summary
//! - [`table`] - Flat tables for rendering and export
//! - [`output`] - Table writers (CSV, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::core::{MessageStore, compute_statistics};
//! use chatstats::parser::TranscriptParser;
//!
//! # fn main() -> chatstats::Result<()> {
//! let parser = TranscriptParser::new();
//! let store = MessageStore::merge([
//!     parser.parse_str("1/1/2024, 10:00 - Alice: hi", "Team"),
//!     parser.parse_str("2/1/2024, 11:00 - Bob: hey", "Family"),
//! ]);
//!
//! let filtered = store.filter(&store.full_criteria());
//! let stats = compute_statistics(filtered.messages())?;
//! assert_eq!(stats.summary.groups, 2);
//! # Ok(())
//! # }
//! ```

pub mod filter;
pub mod output;
pub mod stats;
pub mod store;
pub mod table;

// Re-export main types for convenience
pub use filter::{FilterCriteria, apply_filters};
pub use stats::{
    DailyCount, DetailRow, Ranking, RankingEntry, Statistics, Summary, compute_statistics,
    compute_statistics_for_groups,
};
pub use store::MessageStore;
pub use table::{Cell, Table};

// Re-export Message from the crate root
pub use crate::Message;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
