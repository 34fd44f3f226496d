use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn eol() -> Command {
    Command::new(env!("CARGO_BIN_EXE_eol"))
}

fn fixture(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn shows_help() {
    eol()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dots").and(predicate::str::contains("--no-dots")));
}

#[test]
fn analyzes_single_file() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "mixed.txt", b"a\nb\rc\r\nd");

    let expected = format!(
        "Analyzing file {}\n\
         LF / '\\n' / 10 / 0x0A (Unix) : 1 occurrences\n\
         CR / '\\r' / 13 / 0x0D (Apple): 1 occurrences\n\
         CR+LF                 (Win)  : 1 occurrences\n\
         Total terminators: 3\n\
         Total chars: 8\n\
         Does not end with a line terminator\n\
         \n",
        path.display()
    );

    eol().arg(&path).assert().success().stdout(expected);
}

#[test]
fn reads_stdin_without_files() {
    eol()
        .write_stdin("one\r\ntwo\r\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Analyzing standard input\n"))
        .stdout(predicate::str::contains("CR+LF                 (Win)  : 2 occurrences"))
        .stdout(predicate::str::contains("Does not end").not());
}

#[test]
fn flags_alone_still_read_stdin_once() {
    eol()
        .arg("--no-dots")
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing standard input").count(1));
}

#[test]
fn missing_file_is_reported_and_others_continue() {
    let dir = TempDir::new().unwrap();
    let good = fixture(&dir, "good.txt", b"ok\n");
    let missing = dir.path().join("missing.txt");

    eol()
        .arg(&missing)
        .arg(&good)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!("Can't open file {}!", missing.display())))
        .stdout(predicate::str::contains(format!("Analyzing file {}", good.display())))
        .stdout(predicate::str::contains("missing.txt").not());
}

#[test]
fn binary_content_is_flagged() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "blob.bin", &[0x00, 0x01, 0x02, b'\n']);

    eol()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Probably not a text file! (3 binary chars found)"));
}

#[test]
fn json_format_emits_one_line_per_source() {
    let dir = TempDir::new().unwrap();
    let a = fixture(&dir, "a.txt", b"1\n2\n");
    let b = fixture(&dir, "b.txt", b"1\r\n");

    let output = eol().args(["--format", "json"]).arg(&a).arg(&b).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<serde_json::Value> =
        stdout.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["lf"], 2);
    assert_eq!(records[1]["crlf"], 1);
    assert_eq!(records[1]["ends_with_terminator"], true);
}

#[test]
fn dash_prefixed_names_are_opened_as_files() {
    let dir = TempDir::new().unwrap();
    fixture(&dir, "ok.txt", b"ok\n");
    fixture(&dir, "-dash.txt", b"a\r\n");

    eol()
        .current_dir(dir.path())
        .args(["ok.txt", "-weird.txt", "-dash.txt", "--bogus"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Analyzing file ok.txt"))
        .stdout(predicate::str::contains("Analyzing file -dash.txt"))
        .stdout(predicate::str::contains("CR+LF                 (Win)  : 1 occurrences"))
        .stderr(predicate::str::contains("Can't open file -weird.txt!"))
        .stderr(predicate::str::contains("Can't open file --bogus!"));
}

#[test]
fn bad_option_value_is_a_usage_error() {
    eol().args(["--format", "xml"]).assert().code(2);
}
