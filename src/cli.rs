//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`ExportFormat`] - Export format options, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Participant statistics for exported WhatsApp group chats.
///
/// Every input file becomes one group, labelled from its file name.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats \"WhatsApp Chat with Team.txt\"
    chatstats team.zip family.zip --contacts-only
    chatstats team.zip family.zip -g Team --from 2024-01-01 --to 2024-06-30
    chatstats team.txt -o reports -f json")]
pub struct Args {
    /// Exported transcripts (.txt) or archives (.zip)
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Only include these groups (repeatable, default: all)
    #[arg(short, long = "group", value_name = "LABEL")]
    pub groups: Vec<String>,

    /// Only include these participants (repeatable, default: all)
    #[arg(short, long = "sender", value_name = "NAME")]
    pub senders: Vec<String>,

    /// Leave out participants shown as phone numbers
    #[arg(long)]
    pub contacts_only: bool,

    /// First day to include (YYYY-MM-DD, default: first message)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD, default: last message)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Directory to write the ranking and daily activity tables to
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-delimited table (default)
    #[default]
    Csv,

    /// Array of records
    Json,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
        }
    }
}

// Conversion to library format type
impl From<ExportFormat> for crate::format::OutputFormat {
    fn from(format: ExportFormat) -> crate::format::OutputFormat {
        match format {
            ExportFormat::Csv => crate::format::OutputFormat::Csv,
            ExportFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}
