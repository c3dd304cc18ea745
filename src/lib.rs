//! # Chatstats
//!
//! A Rust library for turning exported WhatsApp group transcripts into
//! structured messages and per-participant activity statistics.
//!
//! ## Overview
//!
//! The pipeline has five stages:
//!
//! 1. **Archive Loader** ([`archive`]) - `.txt` or `.zip` bytes → transcript
//!    text plus a group label derived from the file name
//! 2. **Transcript Parser** ([`parser`]) - text → ordered [`Message`]s
//! 3. **Message Store** ([`core::store`]) - merge transcripts, filter by
//!    group, sender and date range
//! 4. **Statistics Engine** ([`core::stats`]) - ranking, detail rows, group
//!    breakdown, daily timeseries, summary
//! 5. **Export** ([`core::output`], [`format`]) - flat tables to CSV or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let loader = ArchiveLoader::new();
//!     let parser = TranscriptParser::new();
//!
//!     let team = loader.load(
//!         "WhatsApp Chat with Team.txt",
//!         b"01/03/2024, 09:05 - Alice: Hello\nworld\n01/03/2024, 09:06 - Bob: Hi",
//!     )?;
//!     let store = MessageStore::merge([parser.parse_transcript(&team)?]);
//!
//!     let filtered = store.filter(&store.full_criteria());
//!     let stats = compute_statistics(filtered.messages())?;
//!
//!     assert_eq!(stats.summary.total_messages, 2);
//!     assert_eq!(filtered.messages()[0].content, "Hello world");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`archive`] — [`ArchiveLoader`](archive::ArchiveLoader), [`group_label`](archive::group_label)
//! - [`parser`] — [`TranscriptParser`](parser::TranscriptParser) state machine
//! - [`parsing`] — header-line regex, timestamp parsing, [`is_phone_identity`](parsing::is_phone_identity)
//! - [`config`] — [`ParserConfig`](config::ParserConfig), [`LoaderConfig`](config::LoaderConfig)
//! - [`core`] — store, filters, statistics, tables, writers
//! - [`format`] — [`OutputFormat`](format::OutputFormat)
//! - [`error`] — [`ChatstatsError`], [`Result`]
//! - [`prelude`] — Convenient re-exports

pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatstatsError, Result};

    // Loading and parsing
    pub use crate::archive::{ArchiveLoader, Transcript, group_label};
    pub use crate::config::{LoaderConfig, ParserConfig};
    pub use crate::parser::TranscriptParser;
    pub use crate::parsing::is_phone_identity;

    // Store and filtering
    pub use crate::core::filter::{FilterCriteria, apply_filters};
    pub use crate::core::store::MessageStore;

    // Statistics
    pub use crate::core::stats::{
        Ranking, Statistics, compute_statistics, compute_statistics_for_groups,
    };
    pub use crate::core::table::{Cell, Table};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
