//! Transcript parser.
//!
//! Turns raw transcript text into an ordered list of [`Message`]s in one
//! streaming pass. The parser is a two-state machine:
//!
//! - [`ParserState::Idle`] - no message in progress; continuation lines are
//!   dropped
//! - [`ParserState::Accumulating`] - a message is being built; continuation
//!   lines are appended to its content
//!
//! Transitions happen only on header lines. A header line first finalizes the
//! message in progress, then either starts a new one or (system notification,
//! unparseable timestamp) returns to `Idle`.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//! let messages = parser.parse_str("01/03/2024, 09:05 - Alice: Hello\nworld", "Team");
//!
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].sender, "Alice");
//! assert_eq!(messages[0].content, "Hello world");
//! ```

use tracing::{debug, info, warn};

use crate::Message;
use crate::archive::Transcript;
use crate::config::ParserConfig;
use crate::error::{ChatstatsError, Result};
use crate::parsing::{HeaderLine, is_system_sender, parse_header_line};

/// Parser for exported transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

/// State of the line scanner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParserState {
    /// No message in progress.
    #[default]
    Idle,
    /// Building a message from its header and continuation lines.
    Accumulating(Message),
}

/// What a single line did to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Header line started a new message.
    Started,
    /// Header line was discarded (system marker or bad timestamp).
    Discarded,
    /// Continuation appended to the message in progress.
    Continued,
    /// Blank line, or continuation with nothing in progress.
    Ignored,
}

/// Incremental parser over the lines of one transcript.
///
/// Feed lines with [`push_line`](Self::push_line) and call
/// [`finish`](Self::finish) at end of input. Completed messages are collected
/// in file order.
#[derive(Debug)]
pub struct TranscriptScanner<'a> {
    config: &'a ParserConfig,
    group: &'a str,
    state: ParserState,
    emitted: Vec<Message>,
}

impl<'a> TranscriptScanner<'a> {
    /// Creates a scanner for the transcript of `group`.
    pub fn new(config: &'a ParserConfig, group: &'a str) -> Self {
        Self {
            config,
            group,
            state: ParserState::Idle,
            emitted: Vec::new(),
        }
    }

    /// Current state, for inspection.
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Processes one physical line.
    pub fn push_line(&mut self, line: &str) -> LineOutcome {
        match parse_header_line(line) {
            Some(header) => {
                self.finalize();
                self.start(&header)
            }
            None => self.continue_with(line),
        }
    }

    /// Emits the message in progress and returns everything parsed so far.
    pub fn finish(mut self) -> Vec<Message> {
        self.finalize();
        self.emitted
    }

    fn finalize(&mut self) {
        if let ParserState::Accumulating(msg) = std::mem::take(&mut self.state) {
            self.emitted.push(msg);
        }
    }

    fn start(&mut self, header: &HeaderLine<'_>) -> LineOutcome {
        if self.config.skip_system_messages
            && is_system_sender(header.sender, self.config.system_marker)
        {
            debug!(sender = header.sender, "Skipping system notification");
            return LineOutcome::Discarded;
        }

        let Some(timestamp) = header.timestamp() else {
            debug!(
                date = header.date,
                time = header.time,
                "Skipping header with invalid timestamp"
            );
            return LineOutcome::Discarded;
        };

        self.state = ParserState::Accumulating(Message::new(
            timestamp,
            header.sender,
            header.content,
            self.group,
        ));
        LineOutcome::Started
    }

    fn continue_with(&mut self, line: &str) -> LineOutcome {
        let fragment = line.trim();
        if fragment.is_empty() {
            return LineOutcome::Ignored;
        }

        match &mut self.state {
            ParserState::Accumulating(msg) => {
                msg.append_fragment(fragment);
                LineOutcome::Continued
            }
            // Orphan line before the first message or after a discarded header
            ParserState::Idle => LineOutcome::Ignored,
        }
    }
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses transcript text, attributing every message to `group`.
    ///
    /// Never fails: malformed lines are skipped or treated as continuations.
    /// A transcript made only of system notifications yields an empty list.
    pub fn parse_str(&self, text: &str, group: &str) -> Vec<Message> {
        let mut scanner = TranscriptScanner::new(&self.config, group);
        for line in text.lines() {
            scanner.push_line(line);
        }
        scanner.finish()
    }

    /// Parses a loaded transcript.
    ///
    /// Unlike [`parse_str`](Self::parse_str), non-empty input that yields no
    /// messages is reported as [`ChatstatsError::NoMessagesParsed`].
    pub fn parse_transcript(&self, transcript: &Transcript) -> Result<Vec<Message>> {
        let messages = self.parse_str(&transcript.text, &transcript.group);

        if messages.is_empty() && !transcript.text.trim().is_empty() {
            warn!(group = %transcript.group, "Transcript produced no messages");
            return Err(ChatstatsError::no_messages_parsed(&transcript.group));
        }

        info!(
            group = %transcript.group,
            count = messages.len(),
            "Parsed transcript"
        );
        Ok(messages)
    }
}
