//! Header-line recognition for exported transcripts.
//!
//! A header line starts a new message:
//!
//! ```text
//! <D>/<M>/<YYYY>, <H>:<mm> - <sender>: <content>
//! ```
//!
//! Day, month and hour may omit the leading zero, the year has four digits
//! and the minute exactly two. Anything else is a continuation line.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// Pattern of a header line. The sender runs up to the first colon after
/// the ` - ` separator.
pub const HEADER_PATTERN: &str =
    r"^(\d{1,2}/\d{1,2}/\d{4}),\s*(\d{1,2}:\d{2})\s*-\s*([^:]+):\s*(.*)";

/// chrono format applied to `"<date> <time>"`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(HEADER_PATTERN).unwrap());

/// The four captures of a header line, borrowed from the source line.
///
/// `sender` and `content` are already trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub sender: &'a str,
    pub content: &'a str,
}

impl HeaderLine<'_> {
    /// Parses the date and time captures into a timestamp.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(self.date, self.time)
    }
}

/// Splits a line into its header captures.
///
/// Returns `None` for continuation lines, including lines whose sender is
/// blank once trimmed.
pub fn parse_header_line(line: &str) -> Option<HeaderLine<'_>> {
    let caps = RE_HEADER.captures(line)?;

    let sender = caps.get(3).map_or("", |m| m.as_str().trim());
    if sender.is_empty() {
        return None;
    }

    Some(HeaderLine {
        date: caps.get(1).map_or("", |m| m.as_str()),
        time: caps.get(2).map_or("", |m| m.as_str()),
        sender,
        content: caps.get(4).map_or("", |m| m.as_str().trim()),
    })
}

/// Returns `true` if `line` would start a new message.
pub fn is_header_line(line: &str) -> bool {
    parse_header_line(line).is_some()
}

/// Parses day/month/year and hour:minute strings into a local timestamp.
///
/// Out-of-range values (31/02, 24:00, ...) yield `None`.
pub fn parse_timestamp(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let datetime_str = format!("{date_str} {time_str}");
    NaiveDateTime::parse_from_str(&datetime_str, TIMESTAMP_FORMAT).ok()
}

/// Check if a sender is flagged as a system notification.
pub fn is_system_sender(sender: &str, marker: char) -> bool {
    sender.trim_start().starts_with(marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_basic_header() {
        let header = parse_header_line("01/03/2024, 09:05 - Alice: Hello").unwrap();
        assert_eq!(header.date, "01/03/2024");
        assert_eq!(header.time, "09:05");
        assert_eq!(header.sender, "Alice");
        assert_eq!(header.content, "Hello");
    }

    #[test]
    fn test_header_without_leading_zeros() {
        let header = parse_header_line("1/3/2024, 9:05 - Bob: Hi").unwrap();
        let ts = header.timestamp().unwrap();
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(9, 5, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_sender_stops_at_first_colon() {
        let header = parse_header_line("12/12/2023, 18:00 - Carol: time is 18:30: ok").unwrap();
        assert_eq!(header.sender, "Carol");
        assert_eq!(header.content, "time is 18:30: ok");
    }

    #[test]
    fn test_phone_sender() {
        let header = parse_header_line("5/6/2024, 7:00 - +237 6 90 99 37 08: Bonjour").unwrap();
        assert_eq!(header.sender, "+237 6 90 99 37 08");
    }

    #[test]
    fn test_empty_content_is_header() {
        let header = parse_header_line("5/6/2024, 7:00 - Alice:").unwrap();
        assert_eq!(header.content, "");
    }

    #[test]
    fn test_blank_sender_is_not_header() {
        assert!(parse_header_line("5/6/2024, 7:00 -   : text").is_none());
    }

    #[test]
    fn test_non_header_lines() {
        assert!(!is_header_line("just some text"));
        assert!(!is_header_line("5/6/24, 7:00 - Alice: two-digit year"));
        assert!(!is_header_line("[15.01.24, 10:30:45] Alice: bracketed"));
        assert!(!is_header_line("5/6/2024, 7:0 - Alice: one-digit minute"));
        assert!(!is_header_line("5/6/2024, 7:00 - no colon anywhere"));
        assert!(!is_header_line("   5/6/2024, 7:00 - Alice: indented"));
    }

    #[test]
    fn test_invalid_timestamps() {
        assert!(parse_timestamp("31/02/2024", "10:00").is_none());
        assert!(parse_timestamp("13/13/2024", "10:00").is_none());
        assert!(parse_timestamp("01/01/2024", "24:00").is_none());
        assert!(parse_timestamp("01/01/2024", "23:59").is_some());
    }

    #[test]
    fn test_system_sender() {
        assert!(is_system_sender("\u{200E}Alice joined", '\u{200E}'));
        assert!(!is_system_sender("Alice", '\u{200E}'));
        assert!(!is_system_sender("Alice\u{200E}", '\u{200E}'));
    }
}
