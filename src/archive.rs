//! Archive loader.
//!
//! Turns a named byte blob (a plain `.txt` export or a `.zip` archive holding
//! one) into a [`Transcript`]: the decoded text plus a group label derived
//! from the file name.
//!
//! Decoding is tolerant: invalid UTF-8 sequences become U+FFFD instead of
//! failing the load.
//!
//! # Group labels
//!
//! The label depends only on the file name, never on archive contents:
//!
//! 1. recognized extensions are stripped (`.zip`, `.txt`, also stacked)
//! 2. a known "conversation with" prefix is stripped
//! 3. trailing duplicate-count suffixes such as ` (2)` are stripped
//!
//! ```rust
//! use chatstats::archive::group_label;
//! use chatstats::config::LoaderConfig;
//!
//! let config = LoaderConfig::default();
//! assert_eq!(group_label("Discussion WhatsApp avec Team (1).zip", &config), "Team");
//! assert_eq!(group_label("Team.txt", &config), "Team");
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "zip-archive")]
use tracing::debug;

use crate::config::LoaderConfig;
use crate::error::{ChatstatsError, Result};

static RE_COPY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\(\d+\)\s*$").unwrap());

/// Raw transcript text together with the group it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// Decoded transcript text
    pub text: String,
    /// Group label derived from the file name
    pub group: String,
}

impl Transcript {
    /// Creates a transcript from text and a group label.
    pub fn new(text: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            group: group.into(),
        }
    }
}

/// Loads transcripts from text files and archives.
#[derive(Debug, Clone, Default)]
pub struct ArchiveLoader {
    config: LoaderConfig,
}

impl ArchiveLoader {
    /// Creates a loader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Derives the group label for `name` with this loader's configuration.
    pub fn group_label(&self, name: &str) -> String {
        group_label(name, &self.config)
    }

    /// Loads a transcript from a file name and its raw bytes.
    ///
    /// Names with an archive extension are opened as archives and the first
    /// text member in listing order is used; everything else is decoded as
    /// text.
    pub fn load(&self, name: &str, bytes: &[u8]) -> Result<Transcript> {
        let group = self.group_label(name);

        let text = if self.is_archive(name) {
            self.read_archive(name, bytes)?
        } else {
            decode_text(bytes)
        };

        Ok(Transcript { text, group })
    }

    /// Reads a file from disk and loads it as in [`load`](Self::load).
    pub fn load_path(&self, path: &Path) -> Result<Transcript> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.load(&name, &bytes)
    }

    fn is_archive(&self, name: &str) -> bool {
        extension(name).is_some_and(|ext| self.config.is_archive_extension(ext))
    }

    #[cfg(feature = "zip-archive")]
    fn read_archive(&self, name: &str, bytes: &[u8]) -> Result<String> {
        use std::io::{Cursor, Read};

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            if entry.is_dir() {
                continue;
            }
            let is_text =
                extension(entry.name()).is_some_and(|ext| self.config.is_text_extension(ext));
            if !is_text {
                continue;
            }

            debug!(archive = name, entry = entry.name(), "Using archive entry");
            let mut buf = Vec::new();
            entry
                .read_to_end(&mut buf)
                .map_err(|e| ChatstatsError::unreadable(name, e.to_string()))?;
            return Ok(decode_text(&buf));
        }

        Err(ChatstatsError::no_transcript(name))
    }

    #[cfg(not(feature = "zip-archive"))]
    fn read_archive(&self, name: &str, _bytes: &[u8]) -> Result<String> {
        Err(ChatstatsError::UnsupportedArchive {
            name: name.to_string(),
        })
    }
}

/// Decodes bytes as UTF-8, replacing invalid sequences with U+FFFD.
///
/// A leading byte-order mark is dropped so the first header line still
/// matches.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}

/// Derives a group label from a file name.
///
/// Directory components are ignored. A name with no recognizable shape keeps
/// its extension-stripped form.
pub fn group_label(name: &str, config: &LoaderConfig) -> String {
    let file_name = Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());

    let mut stem = file_name.as_str();
    while let Some(ext) = extension(stem) {
        if !(config.is_text_extension(ext) || config.is_archive_extension(ext)) {
            break;
        }
        stem = &stem[..stem.len() - ext.len() - 1];
    }

    let mut label = stem.trim();
    for prefix in &config.conversation_prefixes {
        if let Some(head) = label.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                label = &label[prefix.len()..];
                break;
            }
        }
    }

    let mut label = label.trim().to_string();
    while RE_COPY_SUFFIX.is_match(&label) {
        label = RE_COPY_SUFFIX.replace(&label, "").into_owned();
    }

    let label = label.trim();
    if label.is_empty() {
        stem.trim().to_string()
    } else {
        label.to_string()
    }
}

/// Extension after the last dot, if the dot is not the first character.
fn extension(name: &str) -> Option<&str> {
    let (head, ext) = name.rsplit_once('.')?;
    if head.is_empty() || ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(ext)
}
