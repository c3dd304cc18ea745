//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chatstats::archive::ArchiveLoader;
use chatstats::cli::Args;
use chatstats::core::{
    FilterCriteria, MessageStore, Statistics, Table, compute_statistics_for_groups,
};
use chatstats::format::{OutputFormat, write_to_format};
use chatstats::parser::TranscriptParser;
use chatstats::ChatstatsError;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        if e.is_recoverable() {
            eprintln!("⚠️  {}", e);
        } else {
            eprintln!("❌ Error: {}", e);
        }
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("chatstats=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chatstats=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    println!("💬 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let store = load_all(args)?;
    let criteria = build_criteria(args, &store)?;

    println!("📅 Period:  {} → {}", criteria.date_from, criteria.date_to);
    println!();

    let filtered = store.filter(&criteria);
    let selected_groups = selected_groups(args, &store);
    let stats = compute_statistics_for_groups(filtered.messages(), &selected_groups)?;

    print_summary(&stats);
    print_table("🏆 Ranking", &stats.detail_table());
    print_table("📅 Daily activity", &stats.daily_table());

    if let Some(dir) = &args.output {
        export(&stats, dir, args.format.into(), &criteria)?;
    }

    Ok(())
}

/// Loads and parses every input, skipping transcripts with nothing usable.
fn load_all(args: &Args) -> Result<MessageStore, ChatstatsError> {
    let loader = ArchiveLoader::new();
    let parser = TranscriptParser::new();

    let mut collections = Vec::with_capacity(args.inputs.len());
    let mut first_skip = None;

    for path in &args.inputs {
        let parsed = loader.load_path(path).and_then(|transcript| {
            parser
                .parse_transcript(&transcript)
                .map(|messages| (transcript.group, messages))
        });

        match parsed {
            Ok((group, messages)) => {
                println!(
                    "📂 {}  →  {} ({} messages)",
                    path.display(),
                    group,
                    messages.len()
                );
                collections.push(messages);
            }
            Err(e) if e.is_recoverable() => {
                println!("⚠️  {}: {}", path.display(), e);
                if first_skip.is_none() {
                    first_skip = Some(e);
                }
            }
            Err(e) => return Err(e),
        }
    }

    let store = MessageStore::merge(collections);
    if store.is_empty() {
        return Err(first_skip.unwrap_or_else(|| ChatstatsError::no_messages_parsed("input")));
    }
    Ok(store)
}

/// Groups named with `-g`, first occurrence kept, or every loaded group.
fn selected_groups(args: &Args, store: &MessageStore) -> Vec<String> {
    if args.groups.is_empty() {
        return store.groups();
    }
    let mut groups: Vec<String> = Vec::with_capacity(args.groups.len());
    for group in &args.groups {
        if !groups.contains(group) {
            groups.push(group.clone());
        }
    }
    groups
}

fn build_criteria(args: &Args, store: &MessageStore) -> Result<FilterCriteria, ChatstatsError> {
    let groups: BTreeSet<String> = selected_groups(args, store).into_iter().collect();
    let senders = if args.senders.is_empty() {
        store.available_senders(&groups, args.contacts_only)
    } else {
        args.senders.clone()
    };

    let mut criteria = FilterCriteria::new()
        .with_groups(groups)
        .with_senders(senders);

    if let Some((first, last)) = store.date_bounds() {
        criteria = criteria.with_date_range(first, last);
    }
    if let Some(from) = &args.from {
        criteria = criteria.with_date_from(from)?;
    }
    if let Some(to) = &args.to {
        criteria = criteria.with_date_to(to)?;
    }

    Ok(criteria)
}

fn print_summary(stats: &Statistics) {
    let summary = &stats.summary;
    println!("📊 Overview:");
    println!("   Messages:      {}", summary.total_messages);
    println!("   Participants:  {}", summary.participants);
    println!("   Groups:        {}", summary.groups);
    println!("   Days:          {}", summary.day_span);
    println!("   Msg/day:       {:.1}", summary.messages_per_day);
    println!();
}

fn print_table(title: &str, table: &Table) {
    println!("{}:", title);

    let cells: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let widths: Vec<usize> = table
        .headers()
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |values: Vec<&str>| {
        let padded: Vec<String> = values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:<w$}", v, w = *w))
            .collect();
        println!("   {}", padded.join("  ").trim_end());
    };

    line(table.headers().iter().map(String::as_str).collect());
    for row in &cells {
        line(row.iter().map(String::as_str).collect());
    }
    println!();
}

fn export(
    stats: &Statistics,
    dir: &Path,
    format: OutputFormat,
    criteria: &FilterCriteria,
) -> Result<(), ChatstatsError> {
    fs::create_dir_all(dir)?;

    let stem = format!("chatstats_{}_{}", criteria.date_from, criteria.date_to);
    let ranking_path = dir.join(format!("{stem}_ranking.{}", format.extension()));
    let daily_path = dir.join(format!("{stem}_daily.{}", format.extension()));

    println!("💾 Writing {}...", format);
    write_to_format(&stats.detail_table(), &ranking_path, format)?;
    write_to_format(&stats.daily_table(), &daily_path, format)?;

    println!("✅ Done! Tables saved to {}", dir.display());
    println!("   {}", ranking_path.display());
    println!("   {}", daily_path.display());
    Ok(())
}
