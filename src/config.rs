//! Configuration types for the loader and the parser.
//!
//! Plain structs with builder methods, usable from library code without any
//! CLI framework.
//!
//! - [`ParserConfig`] - transcript parsing settings
//! - [`LoaderConfig`] - which files count as transcripts or archives, and how
//!   group labels are derived from file names
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{LoaderConfig, ParserConfig};
//!
//! let parser = ParserConfig::new().with_skip_system_messages(true);
//! let loader = LoaderConfig::new().with_conversation_prefix("Chat WhatsApp con ");
//! assert!(loader.conversation_prefixes.len() > 1);
//! ```

use serde::{Deserialize, Serialize};

/// Invisible left-to-right mark that exports put in front of the sender of
/// service notifications ("X joined the group", encryption notice, ...).
pub const SYSTEM_MARKER: char = '\u{200E}';

/// Configuration for transcript parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Leading character that flags a system notification (default: U+200E)
    pub system_marker: char,

    /// Drop header lines whose sender starts with `system_marker` (default: true)
    pub skip_system_messages: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            system_marker: SYSTEM_MARKER,
            skip_system_messages: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the system-message marker character.
    #[must_use]
    pub fn with_system_marker(mut self, marker: char) -> Self {
        self.system_marker = marker;
        self
    }

    /// Sets whether to skip system messages.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }
}

/// Configuration for the archive loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Extensions (without dot, lowercase) of plain-text transcripts
    pub text_extensions: Vec<String>,

    /// Extensions (without dot, lowercase) of compressed archives
    pub archive_extensions: Vec<String>,

    /// File-name prefixes the exporter puts before the conversation name
    pub conversation_prefixes: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            text_extensions: vec!["txt".to_string()],
            archive_extensions: vec!["zip".to_string()],
            conversation_prefixes: vec![
                "Discussion WhatsApp avec ".to_string(),
                "WhatsApp Chat with ".to_string(),
                "WhatsApp Chat - ".to_string(),
            ],
        }
    }
}

impl LoaderConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a conversation prefix to strip from file names.
    #[must_use]
    pub fn with_conversation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.conversation_prefixes.push(prefix.into());
        self
    }

    /// Adds a plain-text extension.
    #[must_use]
    pub fn with_text_extension(mut self, ext: impl Into<String>) -> Self {
        self.text_extensions.push(ext.into().to_lowercase());
        self
    }

    /// Returns `true` if `ext` names a compressed archive.
    pub fn is_archive_extension(&self, ext: &str) -> bool {
        self.archive_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Returns `true` if `ext` names a plain-text transcript.
    pub fn is_text_extension(&self, ext: &str) -> bool {
        self.text_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}
