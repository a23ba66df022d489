//! Tests for the `monpoke` binary.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

fn command_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn monpoke(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_monpoke"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_play_file_to_winner() {
    let file = command_file(
        "CREATE Rocket Meekachu 2 1\r\n\
         CREATE Socket Flonyx 5 1\r\n\
         ICHOOSEYOU Meekachu\r\n\
         ICHOOSEYOU Flonyx\r\n\
         ATTACK\r\n\
         ATTACK\r\n\
         ATTACK\r\n\
         ATTACK\r\n\
         ATTACK\r\n",
    );
    let output = monpoke(&["play", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Meekachu has been assigned to team Rocket!\n\
         Flonyx has been assigned to team Socket!\n\
         Meekachu has entered the battle!\n\
         Flonyx has entered the battle!\n\
         Meekachu attacked Flonyx for 1 damage!\n\
         Flonyx attacked Meekachu for 1 damage!\n\
         Meekachu attacked Flonyx for 1 damage!\n\
         Flonyx attacked Meekachu for 1 damage!\n\
         Meekachu has been defeated!\n\
         Socket is the winner!\n"
    );
}

#[test]
fn test_play_halts_with_failure_status() {
    let file = command_file("CREATE Rocket Meekachu 2 1\nICHOOSEYOU Meekachu\nCREATE Socket Flonyx 5 1\n");
    let output = monpoke(&["play", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Meekachu has been assigned to team Rocket!\n\
         You may not choose a Mon until another team arrives\n"
    );
}

#[test]
fn test_play_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_monpoke"))
        .arg("play")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"CREATE Rocket Meekachu 2 1\nCREATE Socket Flonyx 5 1\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 2);
}

#[test]
fn test_play_json_format() {
    let file = command_file("CREATE Rocket Meekachu 2 1\nATTACK\n");
    let output = monpoke(&["play", "--format", "json", file.path().to_str().unwrap()]);
    assert!(!output.status.success());

    let records: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["events"][0]["kind"], "assigned");
    assert_eq!(records[1]["code"], "no_active_creature");
}

#[test]
fn test_play_missing_file() {
    let output = monpoke(&["play", "/definitely/not/here.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}

#[test]
fn test_validate_reports_bad_lines() {
    let good = command_file("CREATE Rocket Meekachu 2 1\n\nATTACK\n");
    let output = monpoke(&["validate", good.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Validation successful!"));

    let bad = command_file("CREATE Rocket Meekachu 2 1\nFLEE\n");
    let output = monpoke(&["validate", bad.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("Unrecognized command: FLEE"));
}
