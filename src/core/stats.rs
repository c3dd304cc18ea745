//! Statistics engine.
//!
//! Everything is recomputed from scratch for each filtered collection; there
//! is no incremental state.
//!
//! | Output | Description |
//! |--------|-------------|
//! | [`Ranking`] | participant message counts, descending and ascending |
//! | [`DetailRow`] | rank, counts, characters, mean length, share, per-group counts |
//! | [`DailyCount`] | messages per calendar date, ascending, no gap filling |
//! | [`Summary`] | totals, day span, messages per day |
//!
//! # Example
//!
//! ```
//! use chatstats::core::stats::compute_statistics;
//! use chatstats::parser::TranscriptParser;
//!
//! # fn main() -> chatstats::Result<()> {
//! let text = "\
//! 1/3/2024, 9:00 - Alice: Hello
//! 1/3/2024, 9:01 - Bob: Hi
//! 2/3/2024, 9:02 - Alice: Again";
//! let messages = TranscriptParser::new().parse_str(text, "Team");
//!
//! let stats = compute_statistics(&messages)?;
//! assert_eq!(stats.summary.total_messages, 3);
//! assert_eq!(stats.details[0].participant, "Alice");
//! assert_eq!(stats.details[0].percentage, 66.7);
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::Message;
use crate::core::table::{Cell, Table};
use crate::error::{ChatstatsError, Result};

/// One participant's message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub participant: String,
    pub messages: usize,
}

/// Message counts per participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ranking {
    /// Highest count first; ties keep first-appearance order.
    entries: Vec<RankingEntry>,
}

impl Ranking {
    /// Counts messages per sender.
    pub fn from_messages(messages: &[Message]) -> Self {
        let tallies = tally_by_sender(messages);
        let mut entries: Vec<RankingEntry> = tallies
            .into_iter()
            .map(|t| RankingEntry {
                participant: t.sender.to_string(),
                messages: t.messages,
            })
            .collect();
        entries.sort_by(|a, b| b.messages.cmp(&a.messages));
        Self { entries }
    }

    /// Table order: most active first.
    pub fn descending(&self) -> &[RankingEntry] {
        &self.entries
    }

    /// Horizontal bar chart order: least active first, so the top bar is rank 1.
    pub fn ascending(&self) -> Vec<RankingEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-participant statistics within a filtered collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    /// 1-based rank by descending message count.
    pub rank: usize,
    pub participant: String,
    pub messages: usize,
    /// Sum of content lengths in characters.
    pub total_chars: usize,
    /// Mean content length, one decimal place.
    pub average_length: f64,
    /// Share of the collection's messages in percent, one decimal place.
    pub percentage: f64,
    /// Unrounded share in percent.
    pub share: f64,
    /// Count per group column, present only when the collection spans
    /// at least two groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_counts: Option<Vec<(String, usize)>>,
}

/// Messages on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Headline numbers for a filtered collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_messages: usize,
    pub participants: usize,
    pub groups: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    /// Days between first and last date.
    pub day_span: i64,
    /// `total / max(day_span, 1)`.
    pub messages_per_day: f64,
}

/// Everything the renderers and exporters need for one filter state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub summary: Summary,
    pub ranking: Ranking,
    pub details: Vec<DetailRow>,
    /// Group columns of the breakdown; empty for single-group collections.
    pub group_columns: Vec<String>,
    pub daily: Vec<DailyCount>,
}

/// Computes statistics using the groups present in `messages` as columns.
///
/// Returns [`ChatstatsError::EmptyFilterResult`] for an empty collection.
pub fn compute_statistics(messages: &[Message]) -> Result<Statistics> {
    let groups = distinct_groups(messages);
    compute_statistics_for_groups(messages, &groups)
}

/// Computes statistics with an explicit group column set.
///
/// `selected_groups` lists the groups chosen in the filter, so a selected
/// group where nobody posted in range still gets a column of zeros. The
/// breakdown is produced only when `messages` spans two or more groups.
pub fn compute_statistics_for_groups(
    messages: &[Message],
    selected_groups: &[String],
) -> Result<Statistics> {
    if messages.is_empty() {
        return Err(ChatstatsError::EmptyFilterResult);
    }

    let ranking = Ranking::from_messages(messages);
    let spans_groups = distinct_groups(messages).len() >= 2;
    let group_columns = if spans_groups {
        let mut columns: Vec<String> = Vec::new();
        for group in selected_groups.iter().cloned().chain(distinct_groups(messages)) {
            if !columns.contains(&group) {
                columns.push(group);
            }
        }
        columns
    } else {
        Vec::new()
    };

    let details = detail_rows(messages, &group_columns);
    let daily = daily_counts(messages);
    let summary = summarize(messages, &ranking)?;

    Ok(Statistics {
        summary,
        ranking,
        details,
        group_columns,
        daily,
    })
}

/// Builds the ranked per-participant rows.
///
/// Participants without messages in `messages` are absent. `group_columns`
/// may be empty to skip the breakdown.
pub fn detail_rows(messages: &[Message], group_columns: &[String]) -> Vec<DetailRow> {
    let total = messages.len();
    let mut tallies = tally_by_sender(messages);
    tallies.sort_by(|a, b| b.messages.cmp(&a.messages));

    tallies
        .into_iter()
        .enumerate()
        .map(|(i, t)| {
            let share = t.messages as f64 / total as f64 * 100.0;
            let group_counts = (!group_columns.is_empty()).then(|| {
                group_columns
                    .iter()
                    .map(|g| (g.clone(), t.per_group.get(g.as_str()).copied().unwrap_or(0)))
                    .collect()
            });

            DetailRow {
                rank: i + 1,
                participant: t.sender.to_string(),
                messages: t.messages,
                total_chars: t.chars,
                average_length: round1(t.chars as f64 / t.messages as f64),
                percentage: round1(share),
                share,
                group_counts,
            }
        })
        .collect()
}

/// Messages per date, ascending. Dates without messages are not emitted.
pub fn daily_counts(messages: &[Message]) -> Vec<DailyCount> {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for msg in messages {
        *per_day.entry(msg.date()).or_default() += 1;
    }
    per_day
        .into_iter()
        .map(|(date, messages)| DailyCount { date, messages })
        .collect()
}

fn summarize(messages: &[Message], ranking: &Ranking) -> Result<Summary> {
    let first_date = messages
        .iter()
        .map(Message::date)
        .min()
        .ok_or(ChatstatsError::EmptyFilterResult)?;
    let last_date = messages
        .iter()
        .map(Message::date)
        .max()
        .ok_or(ChatstatsError::EmptyFilterResult)?;
    let day_span = (last_date - first_date).num_days();
    let total = messages.len();

    Ok(Summary {
        total_messages: total,
        participants: ranking.len(),
        groups: distinct_groups(messages).len(),
        first_date,
        last_date,
        day_span,
        messages_per_day: total as f64 / day_span.max(1) as f64,
    })
}

const DETAIL_HEADERS: [&str; 6] = [
    "Rank",
    "Participant",
    "Messages",
    "Total characters",
    "Average length",
    "Percentage",
];

impl Statistics {
    /// Ranking/detail table for display and export.
    ///
    /// Columns: `Rank`, `Participant`, `Messages`, `Total characters`,
    /// `Average length`, `Percentage`, then one column per group when the
    /// collection spans several groups. A group label that clashes with an
    /// earlier header gets a ` (group)` suffix so every header is unique.
    pub fn detail_table(&self) -> Table {
        let mut headers: Vec<String> = DETAIL_HEADERS.iter().map(|h| (*h).to_string()).collect();
        for group in &self.group_columns {
            let mut header = group.clone();
            while headers.contains(&header) {
                header.push_str(" (group)");
            }
            headers.push(header);
        }

        let mut table = Table::new(headers);
        for row in &self.details {
            let mut cells = vec![
                Cell::from(row.rank),
                Cell::from(row.participant.as_str()),
                Cell::from(row.messages),
                Cell::from(row.total_chars),
                Cell::from(row.average_length),
                Cell::from(row.percentage),
            ];
            if let Some(counts) = &row.group_counts {
                cells.extend(counts.iter().map(|(_, n)| Cell::from(*n)));
            }
            table.push_row(cells);
        }
        table
    }

    /// Daily activity table with columns `Date` and `Messages`.
    pub fn daily_table(&self) -> Table {
        let mut table = Table::new(["Date", "Messages"]);
        for day in &self.daily {
            table.push_row(vec![
                Cell::from(day.date.format("%Y-%m-%d").to_string()),
                Cell::from(day.messages),
            ]);
        }
        table
    }
}

struct SenderTally<'a> {
    sender: &'a str,
    messages: usize,
    chars: usize,
    per_group: HashMap<&'a str, usize>,
}

/// Tallies per sender in first-appearance order.
fn tally_by_sender(messages: &[Message]) -> Vec<SenderTally<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<SenderTally<'_>> = Vec::new();

    for msg in messages {
        let slot = *index.entry(msg.sender.as_str()).or_insert_with(|| {
            tallies.push(SenderTally {
                sender: msg.sender.as_str(),
                messages: 0,
                chars: 0,
                per_group: HashMap::new(),
            });
            tallies.len() - 1
        });
        let tally = &mut tallies[slot];
        tally.messages += 1;
        tally.chars += msg.char_count();
        *tally.per_group.entry(msg.group.as_str()).or_default() += 1;
    }

    tallies
}

fn distinct_groups(messages: &[Message]) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for msg in messages {
        if !groups.contains(&msg.group) {
            groups.push(msg.group.clone());
        }
    }
    groups
}

/// One decimal place, exact halves to even.
fn round1(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}
