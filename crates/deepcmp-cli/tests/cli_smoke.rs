use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_tempfile(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create tempfile");
    write!(file, "{contents}").expect("write tempfile");
    file
}

fn dcmp() -> Command {
    Command::cargo_bin("dcmp").expect("binary dcmp should be built")
}

#[test]
fn help_succeeds() {
    dcmp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deeply compare two JSON or YAML documents"))
        .stdout(predicate::str::contains("Exit codes:"));
}

#[test]
fn version_prints_the_binary_name() {
    dcmp().arg("--version").assert().success().stdout(predicate::str::contains("dcmp"));
}

#[test]
fn equal_documents_exit_zero_with_no_output() {
    let expected = write_tempfile(r#"{"name": "deepcmp", "version": 1}"#);
    let actual = write_tempfile(r#"{"name": "deepcmp", "version": 1}"#);

    dcmp()
        .arg(expected.path())
        .arg(actual.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn differing_documents_exit_one_with_the_report() {
    let expected = write_tempfile(r#"{"name": "deepcmp", "version": 1}"#);
    let actual = write_tempfile(r#"{"name": "deepcmp", "version": 2}"#);

    dcmp()
        .arg(expected.path())
        .arg(actual.path())
        .assert()
        .code(1)
        .stdout(
            "Differences found: 1. The details are as follows:\n\
             Property 'version' mismatch: Expected '1', but was '2'.\n",
        )
        .stderr(predicate::str::is_empty());
}

#[test]
fn the_second_input_defaults_to_stdin() {
    let expected = write_tempfile(r#"{"version": 1}"#);

    dcmp()
        .arg(expected.path())
        .write_stdin(r#"{"version": 2}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Property 'version' mismatch"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn root_mismatches_use_the_bare_format() {
    let expected = write_tempfile("1");
    let actual = write_tempfile("2");

    dcmp()
        .arg(expected.path())
        .arg(actual.path())
        .assert()
        .code(1)
        .stdout("Differences found: 1. The details are as follows:\nMismatch: Expected '1', but was '2'.\n");
}

#[test]
fn yaml_inputs_compare_like_json() {
    let expected = write_tempfile("name: deepcmp\nversion: 1\n");
    let actual = write_tempfile("name: deepcmp\nversion: 2\n");

    dcmp()
        .arg("--yaml")
        .arg(expected.path())
        .arg(actual.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Property 'version' mismatch: Expected '1', but was '2'.",
        ));
}

#[test]
fn json_format_emits_the_serialized_report() {
    let expected = write_tempfile(r#"{"version": 1}"#);
    let actual = write_tempfile(r#"{"version": 2}"#);

    let assert = dcmp()
        .arg("--format")
        .arg("json")
        .arg(expected.path())
        .arg(actual.path())
        .assert()
        .code(1);
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("stdout is JSON");
    assert_eq!(value[0]["path"], "version");
    assert_eq!(value[0]["kind"], "value");
}

#[test]
fn output_flag_writes_the_report_to_a_file() {
    let expected = write_tempfile(r#"{"version": 1}"#);
    let actual = write_tempfile(r#"{"version": 2}"#);
    let dir = tempfile::tempdir().expect("create tempdir");
    let out_path = dir.path().join("report.txt");

    dcmp()
        .arg(expected.path())
        .arg(actual.path())
        .arg("-o")
        .arg(&out_path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out_path).expect("report file readable");
    assert!(written.starts_with("Differences found: 1."));
}

#[test]
fn color_output_wraps_both_sides() {
    let expected = write_tempfile(r#"{"version": 1}"#);
    let actual = write_tempfile(r#"{"version": 2}"#);

    dcmp()
        .arg("--color")
        .arg(expected.path())
        .arg(actual.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\u{1b}[32m1\u{1b}[0m"))
        .stdout(predicate::str::contains("\u{1b}[31m2\u{1b}[0m"));
}

#[test]
fn unreadable_input_exits_two() {
    let expected = write_tempfile(r#"{"version": 1}"#);

    dcmp()
        .arg(expected.path())
        .arg("definitely/not/a/file.json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn parse_errors_exit_two() {
    let expected = write_tempfile(r#"{"version": }"#);
    let actual = write_tempfile(r#"{"version": 1}"#);

    dcmp()
        .arg(expected.path())
        .arg(actual.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to parse"));
}
