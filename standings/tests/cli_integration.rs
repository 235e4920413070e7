//! Integration tests for the standings CLI

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

const SEASON: &str = "\
Round,Date,Team 1,FT,Team 2
Matchday 1,Sat Sep 12 2020,Fulham FC,0\u{2013}3,Arsenal FC
Matchday 1,Sat Sep 12 2020,Crystal Palace FC,1\u{2013}0,Southampton FC
Matchday 2,Sat Sep 19 2020,Arsenal FC,2\u{2013}1,West Ham United FC
Matchday 2,Sat Sep 19 2020,Southampton FC,1\u{2013}1,Fulham FC
Matchday 3,Sat Sep 26 2020,West Ham United FC,2\u{2013}2,Crystal Palace FC
";

fn cargo_run(args: &[&str]) -> Command {
    let mut cmd_args = vec!["run", "-q", "-p", "standings", "--"];
    cmd_args.extend(args);

    let mut cmd = Command::new("cargo");
    cmd.args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .env_remove("RUST_LOG");
    cmd
}

fn run_standings(args: &[&str]) -> (String, String, bool) {
    let output = cargo_run(args).output().expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn run_with_stdin(args: &[&str], input: &str) -> (String, String, bool) {
    let mut child = cargo_run(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    let output = child.wait_with_output().expect("Failed to wait on command");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

/// Write a fixtures file into a fresh temp dir
fn fixtures_file(contents: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eng.1.csv");
    std::fs::write(&path, contents).unwrap();
    let path = path.to_string_lossy().to_string();
    (dir, path)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_standings(&["--help"]);

    assert!(success);
    assert!(stdout.contains("standings"));
    assert!(stdout.contains("table"));
    assert!(stdout.contains("fetch"));
    assert!(stdout.contains("url"));
}

#[test]
fn test_table_help_lists_flags() {
    let (stdout, _, success) = run_standings(&["table", "--help"]);

    assert!(success);
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--win-points"));
    assert!(stdout.contains("--allow-schema-mismatch"));
    assert!(stdout.contains("--splits"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_standings(&["--version"]);

    assert!(success);
    assert!(stdout.contains("standings"));
}

#[test]
fn test_no_command_fails() {
    let (_, _, success) = run_standings(&[]);
    assert!(!success);
}

#[test]
fn test_table_output() {
    let (_dir, path) = fixtures_file(SEASON);
    let (stdout, _, success) = run_standings(&["table", &path]);

    assert!(success);
    for header in ["Pos", "Team", "GD", "Pts"] {
        assert!(stdout.contains(header), "missing {header}");
    }
    let first = stdout
        .lines()
        .find(|l| l.trim_start().starts_with("1 "))
        .unwrap();
    assert!(first.contains("Arsenal FC"));
    assert!(stdout.contains("5 teams, 5 fixtures"));
}

#[test]
fn test_table_with_splits() {
    let (_dir, path) = fixtures_file(SEASON);
    let (stdout, _, success) = run_standings(&["table", &path, "--splits"]);

    assert!(success);
    assert!(stdout.contains("PPG"));
    assert!(stdout.contains("Home"));
    assert!(stdout.contains("Away"));
    assert!(stdout.contains("3.00"));
}

#[test]
fn test_csv_output() {
    let (_dir, path) = fixtures_file(SEASON);
    let (stdout, _, success) = run_standings(&["table", &path, "--output", "csv"]);

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        "team,played,win,draw,loss,scored,conceded,goal_difference,points"
    );
    assert_eq!(lines[1], "Arsenal FC,2,2,0,0,5,1,4,6");
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_json_output() {
    let (_dir, path) = fixtures_file(SEASON);
    let (stdout, _, success) = run_standings(&["table", &path, "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["fixture_count"], 5);
    assert_eq!(parsed["teams"][0]["team"], "Arsenal FC");
    assert_eq!(parsed["teams"][0]["points"], 6);
    assert!(parsed["teams"][0].get("home").is_some());
}

#[test]
fn test_out_flag_writes_file() {
    let (dir, path) = fixtures_file(SEASON);
    let out = dir.path().join("standings.csv");
    let out = out.to_string_lossy().to_string();
    let (stdout, _, success) = run_standings(&["table", &path, "--output", "csv", "--out", &out]);

    assert!(success);
    assert!(stdout.is_empty());
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("team,played"));
    assert!(written.contains("Arsenal FC"));
}

#[test]
fn test_out_flag_writes_plain_table() {
    let (dir, path) = fixtures_file(SEASON);
    let out = dir.path().join("standings.txt");
    let out = out.to_string_lossy().to_string();
    let (_, _, success) = run_standings(&["table", &path, "--out", &out]);

    assert!(success);
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("Pts"));
    assert!(written.contains("5 teams, 5 fixtures"));
    assert!(!written.contains('\u{1b}'));
}

#[test]
fn test_custom_points() {
    let (_dir, path) = fixtures_file(SEASON);
    let (stdout, _, success) = run_standings(&[
        "table",
        &path,
        "--output",
        "csv",
        "--win-points",
        "2",
    ]);

    assert!(success);
    assert!(stdout.contains("Arsenal FC,2,2,0,0,5,1,4,4"));
}

#[test]
fn test_stdin_input() {
    let (stdout, _, success) = run_with_stdin(&["table", "-", "--output", "csv"], SEASON);

    assert!(success);
    assert!(stdout.starts_with("team,played"));
    assert!(stdout.contains("Arsenal FC,2,2,0,0,5,1,4,6"));
}

#[test]
fn test_empty_season() {
    let (_dir, path) = fixtures_file("Round,Date,Team 1,FT,Team 2\n");
    let (stdout, _, success) = run_standings(&["table", &path, "--output", "csv"]);

    assert!(success);
    assert_eq!(
        stdout,
        "team,played,win,draw,loss,scored,conceded,goal_difference,points\n"
    );
}

#[test]
fn test_bad_score_fails() {
    let (_dir, path) = fixtures_file(
        "Round,Date,Team 1,FT,Team 2\nMatchday 1,Sat Sep 12 2020,Fulham FC,0-3,Arsenal FC\n",
    );
    let (stdout, stderr, success) = run_standings(&["table", &path]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("row 1"));
    assert!(stderr.contains("0-3"));
}

#[test]
fn test_schema_mismatch() {
    let csv = "Round,Date,Home,FT,Away\n1,d,A,1\u{2013}0,B\n";
    let (_dir, path) = fixtures_file(csv);

    let (_, stderr, success) = run_standings(&["table", &path]);
    assert!(!success);
    assert!(stderr.contains("Error:"));

    let (stdout, stderr, success) = run_standings(&[
        "table",
        &path,
        "--output",
        "csv",
        "--allow-schema-mismatch",
    ]);
    assert!(success);
    assert!(stdout.contains("A,1,1,0,0,1,0,1,3"));
    assert!(stderr.contains("unexpected column headers"));
}

#[test]
fn test_missing_file_fails() {
    let (_, stderr, success) = run_standings(&["table", "/nonexistent/eng.1.csv"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("/nonexistent/eng.1.csv"));
}

#[test]
fn test_url_command() {
    let (stdout, _, success) = run_standings(&["url", "--season", "2020-21", "--level", "2"]);

    assert!(success);
    assert_eq!(
        stdout.trim(),
        "https://github.com/footballcsv/england/blob/master/2020s/2020-21/eng.2.csv?raw=true"
    );
}

#[test]
fn test_invalid_season_fails() {
    for season in ["2022/23", "2023-25", "20AA-23"] {
        let (_, stderr, success) = run_standings(&["url", "--season", season]);
        assert!(!success, "{season} accepted");
        assert!(stderr.contains("Error:"));
    }
}
