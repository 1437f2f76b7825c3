//! Integration tests for interactive and scripted sessions

use std::io::Write;
use std::process::{Command, Stdio};

fn run_session(args: &[&str], input: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_macrosheet"))
        // Tests must be deterministic and not depend on a user's ~/.config/macrosheet/config.toml.
        .arg("--no-config")
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start macrosheet");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("Failed to write input");
    let output = child.wait_with_output().expect("Failed to wait for macrosheet");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn value_lines(stdout: &str) -> Vec<&str> {
    stdout.lines().filter(|l| l.starts_with("Value: ")).collect()
}

#[test]
fn test_interactive_banner_and_farewell() {
    let (stdout, _, code) = run_session(&[], "q\n");
    assert!(stdout.starts_with("Welcome to the spreadsheet program!\n"));
    assert!(stdout.contains("Supported user instructions are:"));
    assert!(stdout.contains("Type instruction: "));
    assert!(stdout.trim_end().ends_with("Thank you for using this program!"));
    assert_eq!(code, 0);
}

#[test]
fn test_quiet_assign_and_print() {
    let (stdout, _, code) = run_session(
        &["-q"],
        "assign-value A 1 3.5\nprint-value A 1\nprint-value Z 26\nq\n",
    );
    assert_eq!(value_lines(&stdout), vec!["Value: 3.5", "Value: 0.0"]);
    assert!(!stdout.contains("Type instruction"));
    assert_eq!(code, 0);
}

#[test]
fn test_range_assign_then_average() {
    let (stdout, _, code) = run_session(
        &["-q"],
        "range-assign A 1 B 2 1 1\naverage A 1 B 2 A 1\nprint-value A 1\nprint-value B 2\n",
    );
    // A1..B2 = 1, 2, 3, 4; the average overwrites A1 using its prior value.
    assert_eq!(value_lines(&stdout), vec!["Value: 2.5", "Value: 4.0"]);
    assert_eq!(code, 0);
}

#[test]
fn test_bulk_assign_inverted_range_reports_error() {
    let (stdout, _, code) = run_session(
        &["-q"],
        "bulk-assign-value B 1 A 1 5\nprint-value A 1\nq\n",
    );
    assert!(stdout.contains("Error: Invalid cell range: to-row 0 precedes from-row 1"));
    assert_eq!(value_lines(&stdout), vec!["Value: 0.0"]);
    // Interactive sessions exit cleanly even after instruction errors.
    assert_eq!(code, 0);
}

#[test]
fn test_inverted_average_writes_zero() {
    let (stdout, _, _) = run_session(
        &["-q"],
        "assign-value C 3 9\naverage B 2 A 1 C 3\nprint-value C 3\n",
    );
    assert_eq!(value_lines(&stdout), vec!["Value: 0.0"]);
}

#[test]
fn test_undefined_instruction() {
    let (stdout, _, _) = run_session(&["-q"], "explode\nq\n");
    assert!(stdout.contains("Undefined instruction: explode"));
}

#[test]
fn test_script_file_exit_code() {
    use std::fs;

    let dir = std::env::temp_dir();
    let ok_script = dir.join(format!("macrosheet_ok_{}.txt", std::process::id()));
    let bad_script = dir.join(format!("macrosheet_bad_{}.txt", std::process::id()));
    fs::write(&ok_script, "bulk-assign-value A 1 C 3 2\naverage A 1 C 3 D 1\nprint-value D 1\n")
        .unwrap();
    fs::write(&bad_script, "print-value A 0\n").unwrap();

    let (stdout, _, code) = run_session(&["-q", ok_script.to_str().unwrap()], "");
    assert_eq!(value_lines(&stdout), vec!["Value: 2.0"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_session(&["-q", bad_script.to_str().unwrap()], "");
    assert!(stdout.contains("Error: Row or column cannot be negative: (0, -1)"));
    assert_eq!(code, 1);

    fs::remove_file(ok_script).ok();
    fs::remove_file(bad_script).ok();
}

#[test]
fn test_missing_script_file() {
    let (_, stderr, code) = run_session(&["/nonexistent/macrosheet/script.txt"], "");
    assert!(stderr.contains("Failed to open script"));
    assert_eq!(code, 1);
}
