//! Message record produced by the transcript parser.
//!
//! A [`Message`] is one chat utterance attributed to a sender, a group and a
//! minute-precision local timestamp. Messages are created only by the parser
//! and are never mutated afterwards; filters and statistics work on borrowed
//! slices.
//!
//! # Examples
//!
//! ```
//! use chatstats::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 5, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "Hello world", "Team");
//!
//! assert_eq!(msg.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
//! assert_eq!(msg.char_count(), 11);
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One chat utterance from an exported transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Date and time, minute precision, device-local |
/// | `sender` | `String` | Display string from the header line, never empty |
/// | `content` | `String` | Header payload plus continuation lines, space-joined |
/// | `group` | `String` | Label of the transcript this message came from |
///
/// The calendar date is derived from `timestamp` through [`Message::date`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, as printed in the export (no timezone).
    pub timestamp: NaiveDateTime,

    /// Contact name or phone-number-like string of the author.
    pub sender: String,

    /// Text content; continuation lines are joined with a single space.
    pub content: String,

    /// Group label derived from the source file name.
    pub group: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        content: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            content: content.into(),
            group: group.into(),
        }
    }

    /// Calendar date of the message, used for filtering and daily counts.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Time of day of the message.
    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    /// Content length in Unicode scalar values, not bytes.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the group label.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Appends a continuation fragment, separated by a single space.
    pub(crate) fn append_fragment(&mut self, fragment: &str) {
        self.content.push(' ');
        self.content.push_str(fragment);
    }
}
