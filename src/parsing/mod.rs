//! Line-level parsing utilities.
//!
//! Shared by the [`TranscriptParser`](crate::parser::TranscriptParser) and by
//! callers that only need to classify lines or senders.

pub mod header;
pub mod sender;

pub use header::{
    HeaderLine, is_header_line, is_system_sender, parse_header_line, parse_timestamp,
};
pub use sender::is_phone_identity;
