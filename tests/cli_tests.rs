//! CLI integration tests.
//!
//! Tests the jsonpick CLI by invoking the binary as a subprocess on small
//! JSON files written to the system temp directory.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn jsonpick_path() -> PathBuf {
    // Find the jsonpick binary in the target directory
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();

    // Navigate to the deps directory's sibling (the main binary location)
    if path.ends_with("deps") {
        path.pop();
    }

    if cfg!(windows) {
        path.join("jsonpick.exe")
    } else {
        path.join("jsonpick")
    }
}

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("jsonpick_test_{name}.json"));
    fs::write(&path, contents).unwrap();
    path
}

fn run_jsonpick(args: &[&str]) -> (i32, String, String) {
    let binary = jsonpick_path();
    let output = Command::new(&binary)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to spawn jsonpick at {binary:?}: {e}"));

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

#[test]
fn cli_renders_parsed_file() {
    let file = write_fixture("render", r#"{"A":"a", "B": {"C":1, "D":2}, "E":9}"#);
    let (code, stdout, _stderr) = run_jsonpick(&[file.to_str().unwrap()]);

    assert_eq!(code, 0, "Expected success exit code");
    assert!(stdout.contains("A: a"), "Expected rendered entry: {stdout}");
    assert!(stdout.contains("D: 2"), "Expected nested entry: {stdout}");
}

#[test]
fn cli_get_dotted_path() {
    let file = write_fixture("get", r#"{"B": {"C":1, "D":2}}"#);
    let (code, stdout, _stderr) = run_jsonpick(&[file.to_str().unwrap(), "--get", "B.D"]);

    assert_eq!(code, 0, "Expected success exit code");
    assert_eq!(stdout.trim(), "2");
}

#[test]
fn cli_get_missing_key_fails() {
    let file = write_fixture("get_missing", r#"{"B": {"C":1}}"#);
    let (code, _stdout, stderr) = run_jsonpick(&[file.to_str().unwrap(), "--get", "B.X"]);

    assert_ne!(code, 0, "Expected failure exit code");
    assert!(
        stderr.contains("no key: X"),
        "Expected lookup error: {stderr}"
    );
}

#[test]
fn cli_malformed_input_fails() {
    let file = write_fixture("malformed", r#"{"A":}"#);
    let (code, _stdout, stderr) = run_jsonpick(&[file.to_str().unwrap()]);

    assert_ne!(code, 0, "Expected failure exit code");
    assert!(
        stderr.contains("grammar error"),
        "Expected grammar error on stderr: {stderr}"
    );
}

#[test]
fn cli_missing_file_fails() {
    let (code, _stdout, stderr) = run_jsonpick(&["/nonexistent/jsonpick_input.json"]);
    assert_ne!(code, 0, "Expected failure exit code");
    assert!(!stderr.is_empty(), "Expected an error message on stderr");
}

#[test]
fn cli_token_dump() {
    let file = write_fixture("tokens", r#"{"A": 1}"#);
    let (code, stdout, _stderr) = run_jsonpick(&[file.to_str().unwrap(), "--tokens"]);

    assert_eq!(code, 0, "Expected success exit code");
    assert!(
        stdout.contains("LeftBrace"),
        "Expected token dump: {stdout}"
    );
    assert!(stdout.contains("Eof"), "Expected terminating Eof: {stdout}");
}
