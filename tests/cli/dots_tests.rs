use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DOT_LF: &str = "\x1B[32;1m.";
const DOT_CR: &str = "\x1B[31;1m.";
const DOT_CRLF: &str = "\x08\x1B[34;1m.";
const RESET_LINE: &str = "\x1B[0m\n";

fn eol() -> Command {
    Command::new(env!("CARGO_BIN_EXE_eol"))
}

#[test]
fn dots_line_precedes_the_counts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("win.txt");
    fs::write(&path, b"a\r\nb\n").unwrap();

    let output = eol().arg("--dots").arg(&path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let header = format!("Analyzing file {}\n", path.display());
    let dots = format!("{DOT_CR}{DOT_CRLF}{DOT_LF}{RESET_LINE}");
    assert!(stdout.starts_with(&format!("{header}{dots}")), "got {stdout:?}");
    assert!(stdout.contains("\x1B[32;1m*\x1B[0mLF / '\\n' / 10 / 0x0A (Unix) : 1 occurrences"));
}

#[test]
fn dots_apply_only_between_toggles() {
    let dir = TempDir::new().unwrap();
    let names = ["first.txt", "second.txt", "third.txt"];
    for name in names {
        fs::write(dir.path().join(name), b"x\n").unwrap();
    }
    let [first, second, third] = names.map(|n| dir.path().join(n));

    let output = eol()
        .arg(&first)
        .arg("--dots")
        .arg(&second)
        .arg("--no-dots")
        .arg(&third)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    // Exactly one dot line, and it belongs to the second file.
    assert_eq!(stdout.matches(RESET_LINE).count(), 1);
    let second_header = format!("Analyzing file {}\n{DOT_LF}{RESET_LINE}", second.display());
    assert!(stdout.contains(&second_header), "got {stdout:?}");
}

#[test]
fn dots_are_suppressed_for_json() {
    eol()
        .args(["--format", "json", "--dots"])
        .write_stdin("a\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1B[").not())
        .stderr(predicate::str::contains("--dots is ignored"));
}
