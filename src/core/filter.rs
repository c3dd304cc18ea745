//! Filter messages by group, sender and date range.
//!
//! [`FilterCriteria`] is a transient value: applying it yields a new
//! collection and never touches the source.
//!
//! # Behavior Notes
//!
//! - An **empty** group or sender set matches nothing. Pass the full set to
//!   mean "no restriction" (see [`MessageStore::full_criteria`])
//! - The date range is inclusive on both ends and compares calendar dates
//! - All criteria are combined with AND logic
//!
//! [`MessageStore::full_criteria`]: crate::core::store::MessageStore::full_criteria
//!
//! # Example
//!
//! ```
//! use chatstats::core::filter::{FilterCriteria, apply_filters};
//! use chatstats::Message;
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatstats::Result<()> {
//! let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let messages = vec![
//!     Message::new(day(1), "Alice", "Old", "Team"),
//!     Message::new(day(15), "Alice", "New", "Team"),
//!     Message::new(day(15), "Bob", "Other", "Team"),
//! ];
//!
//! let criteria = FilterCriteria::new()
//!     .with_group("Team")
//!     .with_sender("Alice")
//!     .with_date_from("2024-06-10")?;
//!
//! let filtered = apply_filters(&messages, &criteria);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].content, "New");
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::ChatstatsError;

/// Selected groups, selected senders and an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Group labels to keep; empty keeps nothing.
    pub groups: BTreeSet<String>,

    /// Sender identities to keep; empty keeps nothing.
    pub senders: BTreeSet<String>,

    /// First calendar date to keep (inclusive).
    pub date_from: NaiveDate,

    /// Last calendar date to keep (inclusive).
    pub date_to: NaiveDate,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            groups: BTreeSet::new(),
            senders: BTreeSet::new(),
            date_from: NaiveDate::MIN,
            date_to: NaiveDate::MAX,
        }
    }
}

impl FilterCriteria {
    /// Creates criteria with no groups, no senders and an unbounded date range.
    ///
    /// Such criteria match nothing until groups and senders are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one group label.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }

    /// Adds several group labels.
    #[must_use]
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(groups.into_iter().map(Into::into));
        self
    }

    /// Adds one sender identity (exact match).
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.senders.insert(sender.into());
        self
    }

    /// Adds several sender identities.
    #[must_use]
    pub fn with_senders<I, S>(mut self, senders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.senders.extend(senders.into_iter().map(Into::into));
        self
    }

    /// Sets both date bounds.
    #[must_use]
    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// Sets the start date from a `YYYY-MM-DD` string.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatstatsError> {
        self.date_from = parse_date(date_str)?;
        Ok(self)
    }

    /// Sets the end date from a `YYYY-MM-DD` string.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatstatsError> {
        self.date_to = parse_date(date_str)?;
        Ok(self)
    }

    /// Returns `true` if `msg` satisfies every criterion.
    pub fn matches(&self, msg: &Message) -> bool {
        let date = msg.date();
        self.groups.contains(&msg.group)
            && self.senders.contains(&msg.sender)
            && self.date_from <= date
            && date <= self.date_to
    }
}

/// Parse a date string in YYYY-MM-DD format.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, ChatstatsError> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| ChatstatsError::invalid_date(date_str))
}

/// Returns the messages matching `criteria`, in their original order.
pub fn apply_filters(messages: &[Message], criteria: &FilterCriteria) -> Vec<Message> {
    messages
        .iter()
        .filter(|msg| criteria.matches(msg))
        .cloned()
        .collect()
}
