//! Integration tests for the fce CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::{tempdir, TempDir};

/// Run fce inside `dir`, returning stdout, stderr, and the exit code.
fn run_fce(dir: &Path, args: &[&str]) -> (String, String, Option<i32>) {
    let output = Command::new(env!("CARGO_BIN_EXE_fce"))
        .args(args)
        .current_dir(dir)
        .env_remove("FCE_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.code())
}

/// Build a 21-column export line.
fn line(
    semester: &str,
    year: &str,
    instructor: &str,
    courseno: &str,
    section: &str,
    hours: &str,
    rating: &str,
) -> String {
    let mut fields = vec![""; 21];
    fields[0] = semester;
    fields[1] = year;
    fields[2] = instructor;
    fields[3] = "CS";
    fields[4] = courseno;
    fields[5] = "Intro to Computer Systems";
    fields[6] = section;
    fields[11] = hours;
    fields[20] = rating;
    fields.join(",")
}

/// A working directory with `data/fce.csv` holding `lines`.
fn workspace(lines: &[String]) -> TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/fce.csv"), lines.join("\n") + "\n").unwrap();
    dir
}

fn sample() -> TempDir {
    workspace(&[
        line("Fall", "2015", "Bryant", "15213", "A", "12.0", "4.0"),
        line("Spring", "2016", "O'Hallaron", "15213", "B", "10.0", "4.1"),
        line("Summer", "2016", "Doe", "15213", "A", "20.0", "3.0"),
        line("Fall", "2016", "Eckhardt", "15410", "A", "15.0", "4.8"),
        line("Fall", "2014", "Qatar", "15213", "W", "9.0", "4.9"),
    ])
}

#[test]
fn test_cli_help_exits_2() {
    let dir = tempdir().unwrap();
    let (stdout, _, code) = run_fce(dir.path(), &["-h"]);

    assert_eq!(code, Some(2));
    assert!(stdout.starts_with("fce -n <coursenumber>"));
    assert!(stdout.contains("-e exclude summer semester"));
    assert!(stdout.contains("-t no. of results in summary (default=6)"));
}

#[test]
fn test_cli_version() {
    let dir = tempdir().unwrap();
    let (stdout, _, code) = run_fce(dir.path(), &["--version"]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("fce"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let dir = tempdir().unwrap();
    let (stdout, _, code) = run_fce(dir.path(), &["-x"]);

    assert_eq!(code, Some(2));
    assert_eq!(stdout.trim(), "fce -n <coursenumber>");
}

#[test]
fn test_non_integer_top_is_usage_error() {
    let dir = sample();
    let (stdout, _, code) = run_fce(dir.path(), &["-n", "15213", "-t", "many"]);

    assert_eq!(code, Some(2));
    assert_eq!(stdout.trim(), "fce -n <coursenumber>");
}

#[test]
fn test_missing_courseno_is_usage_error() {
    let dir = sample();
    let (stdout, _, code) = run_fce(dir.path(), &["-v"]);

    assert_eq!(code, Some(2));
    assert_eq!(stdout.trim(), "fce -n <coursenumber>");
}

#[test]
fn test_summary_output() {
    let dir = sample();
    let (stdout, _, code) = run_fce(dir.path(), &["-n", "15213"]);

    assert_eq!(code, Some(0));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "15213 - Intro to Computer Systems -CS");
    // (12 + 10 + 20) / 3 and (4.0 + 4.1 + 3.0) / 3
    assert_eq!(lines[1], "AVG. HOURS: 14.0 hrs/wk");
    assert_eq!(lines[2], "AVG. RATING: 3.7/5.0");
    assert_eq!(lines[3], "");
    assert!(lines[4].contains("SEMESTER"));
    // Newest first, ties in file order
    assert!(lines[5].contains("O'Hallaron"));
    assert!(lines[6].contains("Doe"));
    assert!(lines[7].contains("Bryant"));
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_two_rows_end_to_end() {
    let dir = workspace(&[
        line("Fall", "2015", "Bryant", "15213", "A", "10.0", "4.0"),
        line("Fall", "2016", "Bryant", "15213", "A", "12.0", "4.1"),
    ]);
    let (stdout, _, code) = run_fce(dir.path(), &["--courseno=15213"]);

    assert_eq!(code, Some(0));
    assert!(stdout.starts_with("15213 - Intro to Computer Systems -CS\n"));
    assert!(stdout.contains("AVG. HOURS: 11.0 hrs/wk\n"));
    assert!(stdout.contains("AVG. RATING: 4.1/5.0\n"));
}

#[test]
fn test_exclude_summer_and_top() {
    let dir = sample();
    let (stdout, _, code) = run_fce(dir.path(), &["-n", "15213", "-e", "-t", "1"]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("AVG. HOURS: 10.0 hrs/wk"));
    assert!(stdout.contains("AVG. RATING: 4.1/5.0"));
    assert!(!stdout.contains("Doe"));
    assert!(!stdout.contains("Bryant"));
}

#[test]
fn test_verbose_shows_all_matches() {
    let dir = sample();
    let (stdout, _, code) = run_fce(dir.path(), &["-n", "15213", "-t", "1", "-v"]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("AVG. HOURS: 10.0 hrs/wk"));
    let table: Vec<&str> = stdout.lines().skip(5).collect();
    assert_eq!(table.len(), 3);
    assert!(table[0].contains("Bryant"));
    assert!(table[1].contains("O'Hallaron"));
    assert!(table[2].contains("Doe"));
}

#[test]
fn test_no_data_for_class() {
    let dir = sample();
    let (stdout, _, code) = run_fce(dir.path(), &["-n", "99999"]);

    assert_eq!(code, Some(2));
    assert_eq!(stdout, "No data for class\n");
}

#[test]
fn test_missing_data_dir_is_no_data() {
    let dir = tempdir().unwrap();
    let (stdout, _, code) = run_fce(dir.path(), &["-n", "15213"]);

    assert_eq!(code, Some(2));
    assert_eq!(stdout, "No data for class\n");
}

#[test]
fn test_explicit_data_dir() {
    let data = sample();
    let elsewhere = tempdir().unwrap();
    let data_dir = data.path().join("data");
    let (stdout, _, code) = run_fce(
        elsewhere.path(),
        &["-n", "15213", "-d", data_dir.to_str().unwrap()],
    );

    assert_eq!(code, Some(0));
    assert!(stdout.starts_with("15213 - "));
}

#[test]
fn test_bad_hours_is_runtime_error() {
    let dir = workspace(&[line("Fall", "2015", "Bryant", "15213", "A", "lots", "4.0")]);
    let (stdout, stderr, code) = run_fce(dir.path(), &["-n", "15213"]);

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("lots"));
}

#[test]
fn test_json_output() {
    let dir = sample();
    let (stdout, _, code) = run_fce(dir.path(), &["-n", "15213", "--output", "json"]);

    assert_eq!(code, Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["summary"]["courseno"], 15213);
    assert_eq!(parsed["summary"]["records"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["table"]["headers"][0], "SEMESTER");
    assert_eq!(parsed["table"]["rows"].as_array().unwrap().len(), 3);
}
