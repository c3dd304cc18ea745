//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers every
//! failure the loader, parser, filter and statistics stages can report.
//!
//! # Error Handling Philosophy
//!
//! - Nothing here is fatal: every failure is a value returned to the caller
//! - Per-line parse failures are **not** errors; garbled lines degrade to
//!   continuation or discard behavior inside the parser
//! - Recoverable, user-visible conditions ([`NoMessagesParsed`],
//!   [`EmptyFilterResult`], [`NoTranscriptFound`]) can be told apart with
//!   [`ChatstatsError::is_recoverable`]
//!
//! [`NoMessagesParsed`]: ChatstatsError::NoMessagesParsed
//! [`EmptyFilterResult`]: ChatstatsError::EmptyFilterResult
//! [`NoTranscriptFound`]: ChatstatsError::NoTranscriptFound

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred while reading an input or writing an export.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The supplied bytes could not be turned into transcript text.
    ///
    /// Decoding itself is tolerant (invalid sequences become U+FFFD), so this
    /// is only raised when an archive entry cannot be read at all.
    #[error("Cannot read '{name}': {reason}")]
    UnreadableFile {
        /// File name as supplied by the caller
        name: String,
        /// What went wrong
        reason: String,
    },

    /// A compressed archive contained no text member.
    #[error("No transcript found in archive '{name}'")]
    NoTranscriptFound {
        /// Archive file name
        name: String,
    },

    /// The input looks like an archive but archive support is not compiled in.
    #[error("Archive support is disabled, cannot open '{name}'")]
    UnsupportedArchive {
        /// Archive file name
        name: String,
    },

    /// The archive container itself is corrupt.
    #[cfg(feature = "zip-archive")]
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A non-empty transcript produced zero messages.
    ///
    /// Happens with malformed exports or transcripts made only of system
    /// notifications.
    #[error("No messages could be parsed from '{group}'. Check the export format.")]
    NoMessagesParsed {
        /// Group label of the offending transcript
        group: String,
    },

    /// The filter criteria matched no messages.
    #[error("No messages match the selected filters")]
    EmptyFilterResult,

    /// Invalid date in a date-range bound.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Unknown or disabled output format.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates an unreadable-file error.
    pub fn unreadable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ChatstatsError::UnreadableFile {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a no-transcript-found error for an archive.
    pub fn no_transcript(name: impl Into<String>) -> Self {
        ChatstatsError::NoTranscriptFound { name: name.into() }
    }

    /// Creates a no-messages-parsed error for a group.
    pub fn no_messages_parsed(group: impl Into<String>) -> Self {
        ChatstatsError::NoMessagesParsed {
            group: group.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatsError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is an invalid date error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatsError::InvalidDate { .. })
    }

    /// Returns `true` for conditions that should be shown to the user as a
    /// warning rather than treated as a failure of the tool.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ChatstatsError::NoMessagesParsed { .. }
                | ChatstatsError::EmptyFilterResult
                | ChatstatsError::NoTranscriptFound { .. }
        )
    }
}
