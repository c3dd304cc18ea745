//! End-to-end CLI tests for chatstats.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: Text and zip exports, multi-group merging
//! - **Filters**: Group, sender, contacts-only and date filtering
//! - **Export**: CSV and JSON table files
//! - **Error handling**: Proper messages and exit codes for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

// ============================================================================
// Test Fixtures
// ============================================================================

const TEAM: &str = "\
01/03/2024, 09:05 - Alice: Hello
world
01/03/2024, 09:06 - Bob: Hi
01/03/2024, 09:07 - \u{200E}Alice changed the subject to: Weekend
02/03/2024, 18:30 - Alice: Meeting moved
05/03/2024, 07:00 - +33 6 12 34 56 78: Who is this?
";

const FAMILY: &str = "\
28/02/2024, 20:01 - Mum: Dinner on Sunday?
01/03/2024, 12:00 - Alice: Yes
";

/// Creates a temporary directory with one text export, one zip export and
/// one file that is not a transcript.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    fs::write(dir.path().join("WhatsApp Chat with Team.txt"), TEAM).unwrap();

    let file = fs::File::create(dir.path().join("Discussion WhatsApp avec Family (1).zip")).unwrap();
    let mut zip = ZipWriter::new(file);
    zip.start_file("media/IMG-0001.jpg", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"\xFF\xD8\xFF").unwrap();
    zip.start_file("Discussion WhatsApp avec Family.txt", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(FAMILY.as_bytes()).unwrap();
    zip.finish().unwrap();

    fs::write(dir.path().join("notes.txt"), "shopping list\n- milk\n").unwrap();

    dir
}

fn chatstats_cmd() -> Command {
    let mut cmd = Command::from_std(std::process::Command::new(env!("CARGO_BIN_EXE_chatstats")));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn team(dir: &TempDir) -> String {
    fixture(dir, "WhatsApp Chat with Team.txt")
}

fn family(dir: &TempDir) -> String {
    fixture(dir, "Discussion WhatsApp avec Family (1).zip")
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_single_text_export() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .arg(team(&fixtures))
            .assert()
            .success()
            .stdout(predicate::str::contains("Team (4 messages)"))
            .stdout(predicate::str::contains("Ranking"))
            .stdout(predicate::str::contains("Alice"))
            .stdout(predicate::str::contains("changed the subject").not());
    }

    #[test]
    fn test_zip_export_labelled_from_file_name() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .arg(family(&fixtures))
            .assert()
            .success()
            .stdout(predicate::str::contains("Family (2 messages)"))
            .stdout(predicate::str::contains("Mum"));
    }

    #[test]
    fn test_two_groups_show_breakdown_columns() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([team(&fixtures), family(&fixtures)])
            .assert()
            .success()
            .stdout(predicate::str::contains("Groups:        2"))
            .stdout(predicate::str::contains("Percentage  Team  Family"));
    }

    #[test]
    fn test_help() {
        chatstats_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--contacts-only"))
            .stdout(predicate::str::contains("--group"));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([team(&fixtures), "-v".to_string()])
            .assert()
            .success()
            .stderr(predicate::str::contains("Parsed transcript"));
    }
}

// ============================================================================
// Filter Tests
// ============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_group_filter() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([team(&fixtures), family(&fixtures), "-g".into(), "Family".into()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:      2"))
            .stdout(predicate::str::contains("Bob").not());
    }

    #[test]
    fn test_sender_filter() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([team(&fixtures), "-s".into(), "Bob".into()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:      1"))
            .stdout(predicate::str::contains("Participants:  1"));
    }

    #[test]
    fn test_contacts_only_hides_phone_numbers() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([team(&fixtures), "--contacts-only".into()])
            .assert()
            .success()
            .stdout(predicate::str::contains("+33 6 12 34 56 78").not())
            .stdout(predicate::str::contains("Messages:      3"));
    }

    #[test]
    fn test_date_range() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([
                team(&fixtures),
                "--from".into(),
                "2024-03-02".into(),
                "--to".into(),
                "2024-03-02".into(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("2024-03-02 → 2024-03-02"))
            .stdout(predicate::str::contains("Messages:      1"));
    }

    #[test]
    fn test_empty_result_warns() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([team(&fixtures), "--from".into(), "2030-01-01".into()])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("No messages match the selected filters"));
    }
}

// ============================================================================
// Export Tests
// ============================================================================

mod export {
    use super::*;

    fn out_dir(dir: &TempDir) -> PathBuf {
        dir.path().join("reports")
    }

    #[test]
    fn test_csv_export() {
        let fixtures = setup_fixtures();
        let out = out_dir(&fixtures);

        chatstats_cmd()
            .args([team(&fixtures), family(&fixtures), "-o".into(), out.to_str().unwrap().into()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"));

        let ranking = fs::read_to_string(out.join("chatstats_2024-02-28_2024-03-05_ranking.csv")).unwrap();
        let mut lines = ranking.lines();
        assert_eq!(
            lines.next(),
            Some("Rank,Participant,Messages,Total characters,Average length,Percentage,Team,Family")
        );
        assert_eq!(lines.next(), Some("1,Alice,3,27,9.0,50.0,2,1"));

        let daily = fs::read_to_string(out.join("chatstats_2024-02-28_2024-03-05_daily.csv")).unwrap();
        assert!(daily.starts_with("Date,Messages\n2024-02-28,1\n2024-03-01,3\n"));
    }

    #[test]
    fn test_json_export() {
        let fixtures = setup_fixtures();
        let out = out_dir(&fixtures);

        chatstats_cmd()
            .args([
                team(&fixtures),
                "-o".into(),
                out.to_str().unwrap().into(),
                "-f".into(),
                "json".into(),
            ])
            .assert()
            .success();

        let ranking = fs::read_to_string(out.join("chatstats_2024-03-01_2024-03-05_ranking.json")).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&ranking).unwrap();
        assert_eq!(rows[0]["Participant"], "Alice");
        assert_eq!(rows[0]["Messages"], 2);
        assert!(rows[0].get("Team").is_none());
    }

    #[test]
    fn test_export_stem_follows_date_filter() {
        let fixtures = setup_fixtures();
        let out = out_dir(&fixtures);

        chatstats_cmd()
            .args([
                team(&fixtures),
                "--from".into(),
                "2024-03-02".into(),
                "-o".into(),
                out.to_str().unwrap().into(),
            ])
            .assert()
            .success();

        assert!(out.join("chatstats_2024-03-02_2024-03-05_daily.csv").exists());
    }

    #[test]
    fn test_repeated_group_flag_gives_one_column() {
        let fixtures = setup_fixtures();
        let out = out_dir(&fixtures);

        chatstats_cmd()
            .args([
                team(&fixtures),
                family(&fixtures),
                "-g".into(),
                "Team".into(),
                "-g".into(),
                "Team".into(),
                "-g".into(),
                "Family".into(),
                "-f".into(),
                "json".into(),
                "-o".into(),
                out.to_str().unwrap().into(),
            ])
            .assert()
            .success();

        let ranking = fs::read_to_string(out.join("chatstats_2024-02-28_2024-03-05_ranking.json")).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&ranking).unwrap();
        assert_eq!(rows[0].as_object().unwrap().len(), 8);
        assert_eq!(ranking.matches("\"Team\"").count(), rows.as_array().unwrap().len());
        assert_eq!(rows[0]["Messages"], 3);
        assert_eq!(rows[0]["Team"], 2);
    }

    #[test]
    fn test_group_named_like_column_keeps_message_count() {
        let fixtures = setup_fixtures();
        let out = out_dir(&fixtures);
        let messages = fixture(&fixtures, "Messages.txt");
        fs::write(&messages, FAMILY).unwrap();

        chatstats_cmd()
            .args([
                team(&fixtures),
                messages,
                "-f".into(),
                "json".into(),
                "-o".into(),
                out.to_str().unwrap().into(),
            ])
            .assert()
            .success();

        let ranking = fs::read_to_string(out.join("chatstats_2024-02-28_2024-03-05_ranking.json")).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&ranking).unwrap();
        assert_eq!(rows[0]["Participant"], "Alice");
        assert_eq!(rows[0]["Messages"], 3);
        assert_eq!(rows[0]["Messages (group)"], 1);
        assert_eq!(rows[0]["Team"], 2);
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_input() {
        chatstats_cmd()
            .arg("/nonexistent/WhatsApp Chat with Nobody.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_no_inputs() {
        chatstats_cmd().assert().failure();
    }

    #[test]
    fn test_invalid_date() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([team(&fixtures), "--from".into(), "01/03/2024".into()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date"));
    }

    #[test]
    fn test_unparseable_file_skipped() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([team(&fixtures), fixture(&fixtures, "notes.txt")])
            .assert()
            .success()
            .stdout(predicate::str::contains("No messages could be parsed from 'notes'"));
    }

    #[test]
    fn test_only_unparseable_file_fails() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&fixtures, "notes.txt"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("No messages could be parsed"));
    }

    #[test]
    fn test_unknown_format() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([team(&fixtures), "-f".into(), "xml".into()])
            .assert()
            .failure();
    }
}
