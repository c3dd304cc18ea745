//! Message store: merged messages from one or more transcripts.
//!
//! Merging is plain concatenation in upload order. There is no message
//! identity beyond the tuple of fields, so overlapping exports keep their
//! duplicates.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::Message;
use crate::core::filter::{FilterCriteria, apply_filters};
use crate::parsing::is_phone_identity;

/// Ordered collection of messages from any number of groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already parsed messages.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Concatenates collections, preserving the order within and across them.
    ///
    /// # Example
    ///
    /// ```
    /// use chatstats::core::MessageStore;
    /// use chatstats::parser::TranscriptParser;
    ///
    /// let parser = TranscriptParser::new();
    /// let a = parser.parse_str("1/1/2024, 10:00 - Alice: hi", "Team");
    /// let b = parser.parse_str("1/1/2024, 10:00 - Alice: hi", "Team");
    ///
    /// let store = MessageStore::merge([a, b]);
    /// assert_eq!(store.len(), 2);
    /// ```
    pub fn merge<I>(collections: I) -> Self
    where
        I: IntoIterator<Item = Vec<Message>>,
    {
        let mut store = Self::new();
        for collection in collections {
            store.extend(collection);
        }
        store
    }

    /// Returns the messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Consumes the store, returning its messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// Returns an iterator over the messages.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the store holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns a new store with the messages matching `criteria`.
    pub fn filter(&self, criteria: &FilterCriteria) -> MessageStore {
        Self::from_messages(apply_filters(&self.messages, criteria))
    }

    /// Distinct group labels in first-seen order.
    pub fn groups(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.messages
            .iter()
            .filter(|m| seen.insert(m.group.as_str()))
            .map(|m| m.group.clone())
            .collect()
    }

    /// Distinct senders, sorted.
    pub fn senders(&self) -> Vec<String> {
        self.messages
            .iter()
            .map(|m| m.sender.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct senders who posted in any of `groups`, sorted.
    pub fn senders_in_groups(&self, groups: &BTreeSet<String>) -> Vec<String> {
        self.available_senders(groups, false)
    }

    /// Sender options for the given groups.
    ///
    /// With `contacts_only`, senders that look like phone numbers (no saved
    /// contact name) are left out.
    pub fn available_senders(&self, groups: &BTreeSet<String>, contacts_only: bool) -> Vec<String> {
        self.messages
            .iter()
            .filter(|m| groups.contains(&m.group))
            .map(|m| m.sender.as_str())
            .filter(|s| !contacts_only || !is_phone_identity(s))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Earliest and latest message date.
    ///
    /// Callers bounding a date picker should ask the unfiltered store so the
    /// range does not shrink as other filters change.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.messages.iter().map(Message::date).min()?;
        let last = self.messages.iter().map(Message::date).max()?;
        Some((first, last))
    }

    /// Criteria that keep every message in this store.
    pub fn full_criteria(&self) -> FilterCriteria {
        let criteria = FilterCriteria::new()
            .with_groups(self.groups())
            .with_senders(self.senders());
        match self.date_bounds() {
            Some((from, to)) => criteria.with_date_range(from, to),
            None => criteria,
        }
    }
}

impl Extend<Message> for MessageStore {
    fn extend<T: IntoIterator<Item = Message>>(&mut self, iter: T) {
        self.messages.extend(iter);
    }
}

impl FromIterator<Message> for MessageStore {
    fn from_iter<T: IntoIterator<Item = Message>>(iter: T) -> Self {
        Self::from_messages(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MessageStore {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
