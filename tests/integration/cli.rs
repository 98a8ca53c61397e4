//! The `rankfuse` binary, run as a subprocess.

use super::common::unanimous_config;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn rankfuse(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rankfuse"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run rankfuse")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_fuse_prints_demo_ranking() {
    let out = rankfuse(&["fuse"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "1. Doc A (Score: 0.0484)");
    assert_eq!(lines[1], "2. Doc B (Score: 0.0484)");
    assert!(lines[4].starts_with("5. Doc E"));
}

#[test]
fn test_fuse_json() {
    let out = rankfuse(&["fuse", "--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let labels: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, ["Doc A", "Doc B", "Doc C", "Doc D", "Doc E"]);
}

#[test]
fn test_fuse_division_by_zero_exits_nonzero() {
    let out = rankfuse(&["fuse", "--k", "-1"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("division by zero"), "stderr: {}", stderr);
}

#[test]
fn test_show_breakdown() {
    let out = rankfuse(&["show", "--step", "breakdown"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("1/(60 + 1) + 1/(60 + 2) + 1/(60 + 3) = 0.0484"));
}

#[test]
fn test_show_final_json_carries_error() {
    let out = rankfuse(&["show", "--step", "final", "--k", "-1", "--json"]);
    // An undefined ranking is a view, not a failure
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["view"], "final_ranking");
    assert_eq!(json["error"]["error"], "division_by_zero");
}

#[test]
fn test_explain_unknown_item() {
    let out = rankfuse(&["explain", "Doc Z"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("item 'Doc Z' not found"));
}

#[test]
fn test_explain_json() {
    let out = rankfuse(&["explain", "Doc C", "--k", "0", "--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["label"], "Doc C");
    assert_eq!(json["total"].as_f64().unwrap(), 0.5 + 0.25 + 1.0);
}

#[test]
fn test_data_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&unanimous_config()).unwrap().as_bytes())
        .unwrap();
    let path = file.path().to_str().unwrap();

    let out = rankfuse(&["--data", path, "fuse"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("1. alpha"));
}

#[test]
fn test_invalid_data_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"items": ["x"], "sources": [{"name": "s", "ranks": [2]}]}"#)
        .unwrap();
    let path = file.path().to_str().unwrap();

    let out = rankfuse(&["--data", path, "fuse"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid rank table"));
}

#[test]
fn test_walk_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rankfuse"))
        .arg("walk")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn rankfuse walk");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"n\nk 1\nn\nq\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();

    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Initial Rankings"));
    assert!(text.contains("RRF Scores (k = 1)"));
    assert!(text.contains("Final Ranking (k = 1)"));
}
