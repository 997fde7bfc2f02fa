//! CLI contract tests: output formats, exit codes, and init

use std::path::Path;
use std::process::{Command, Output};

const STORY: &str = "City council approves new library funding after long public debate. \
The Riverside council voted 5-2 on Tuesday to spend $4.5 million on a new branch library, \
according to Dr. Jane Smith, who chairs the budget committee.

However, critics argued the project costs too much during a tight budget year. \
According to Prof. Alan Reyes, the old building would cost $1.8 million to repair.";

fn newsgrade(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_newsgrade"))
        .args(args)
        .current_dir(dir)
        .env_remove("NEWSGRADE_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run newsgrade")
}

fn setup() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("story.txt"), STORY).unwrap();
    dir
}

#[test]
fn test_analyze_json_to_stdout() {
    let dir = setup();
    let out = newsgrade(dir.path(), &["analyze", "story.txt", "--format", "json"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert!(json["overall_score"].as_u64().unwrap() <= 100);
    assert!(json["letter_grade"].is_string());
    assert!(json["score_breakdown"]["objectivity"]["score"].is_number());
}

#[test]
fn test_analyze_multiple_files_json_array() {
    let dir = setup();
    std::fs::write(dir.path().join("short.txt"), "ok").unwrap();
    let out = newsgrade(dir.path(), &["analyze", "story.txt", "short.txt", "-f", "json"]);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let items = json.as_array().expect("batch output is an array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["source"], "story.txt");
    assert_eq!(items[1]["letter_grade"], "F");
}

#[test]
fn test_output_file() {
    let dir = setup();
    let out = newsgrade(
        dir.path(),
        &["analyze", "story.txt", "-f", "markdown", "-o", "report.md"],
    );
    assert!(out.status.success());
    let md = std::fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(md.starts_with("# Article Quality Report"));
}

#[test]
fn test_output_file_gets_format_extension() {
    let dir = setup();
    let out = newsgrade(dir.path(), &["analyze", "story.txt", "-f", "json", "-o", "report"]);
    assert!(out.status.success());
    let json = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
}

#[test]
fn test_fail_below_exit_code() {
    let dir = setup();
    let out = newsgrade(dir.path(), &["analyze", "story.txt", "--fail-below", "100"]);
    assert_eq!(out.status.code(), Some(1));

    let out = newsgrade(dir.path(), &["analyze", "story.txt", "--fail-below", "0"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_empty_input_exit_code() {
    let dir = setup();
    std::fs::write(dir.path().join("empty.txt"), "\n  \n").unwrap();
    let out = newsgrade(dir.path(), &["analyze", "empty.txt"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("empty"));
}

#[test]
fn test_explain_score_appends_breakdown() {
    let dir = setup();
    let out = newsgrade(dir.path(), &["analyze", "story.txt", "--explain-score"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("## Score Breakdown"));
}

#[test]
fn test_init_then_config_is_used() {
    let dir = setup();
    let out = newsgrade(dir.path(), &["init"]);
    assert!(out.status.success());
    let config_path = dir.path().join("newsgrade.toml");
    assert!(config_path.exists());

    // Switch the default format through the written config
    let config = std::fs::read_to_string(&config_path)
        .unwrap()
        .replace("format = \"text\"", "format = \"json\"");
    std::fs::write(&config_path, config).unwrap();

    let out = newsgrade(dir.path(), &["analyze", "story.txt"]);
    assert!(out.status.success());
    assert!(serde_json::from_slice::<serde_json::Value>(&out.stdout).is_ok());
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = setup();
    std::fs::write(dir.path().join("newsgrade.toml"), "[weights]\nobjectivity = 0.9\n").unwrap();
    let out = newsgrade(dir.path(), &["analyze", "story.txt"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("weights"));
}

#[test]
fn test_explain_command() {
    let dir = setup();
    let out = newsgrade(dir.path(), &["explain"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Source Quality"));
    assert!(stdout.contains("A+"));
}
