#![allow(clippy::expect_used, deprecated)]

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

const MODELS_TRANSCRIPT: &str = r##"User
{
  "type": "object",
  "properties": {
    "name": {
      "type": "string"
    },
    "age": {
      "type": "integer"
    },
    "addr": {
      "$ref": "#/definitions/Address"
    },
    "score": {
      "type": "number"
    },
    "active": {
      "type": "boolean"
    },
    "created": {
      "$ref": "#/definitions/Time"
    },
    "extra": {
      "type": "object"
    },
    "tags": {
      "type": "array"
    },
    "Note": {
      "type": "string"
    }
  },
  "required": [
    "name",
    "addr",
    "score",
    "active"
  ]
}

Users
Array of '#/definitions/User'

Post
+--> mgm.DefaultModel
{
  "type": "object",
  "properties": {
    "title": {
      "type": "string"
    },
    "author": {
      "$ref": "#/definitions/User"
    }
  },
  "required": [
    "title"
  ]
}

Plain

"##;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn bin() -> Command {
    Command::cargo_bin("go-struct-schema").expect("Failed to find go-struct-schema binary")
}

fn write_go(dir: &tempfile::TempDir, src: &str) -> PathBuf {
    let path = dir.path().join("input.go");
    std::fs::write(&path, src).expect("write fixture");
    path
}

#[test]
fn test_models_transcript() {
    bin()
        .arg(fixture("models.go"))
        .assert()
        .success()
        .stdout(MODELS_TRANSCRIPT);
}

#[test]
fn test_runs_are_identical() {
    let first = bin().arg(fixture("models.go")).output().expect("run");
    let second = bin().arg(fixture("models.go")).output().expect("run");
    assert_eq!(String::from_utf8_lossy(&first.stdout), String::from_utf8_lossy(&second.stdout));
}

#[test]
fn test_out_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/schema.txt");
    bin()
        .arg(fixture("models.go"))
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout("");
    assert_eq!(std::fs::read_to_string(&out).expect("read output"), MODELS_TRANSCRIPT);
}

#[test]
fn test_literal_required() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_go(
        &dir,
        "package m\n\ntype Row struct {\n\tID int64 `json:\"id,string\"`\n}\n",
    );
    bin()
        .arg(&path)
        .arg("--literal-required")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id,string\""));
    bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id,string\"").not());
}

#[test]
fn test_declaration_dump_round_trips_through_the_cli() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dump = dir.path().join("decls.json");
    bin()
        .arg(fixture("models.go"))
        .arg("--dump-declarations")
        .args(["--out", dump.to_str().unwrap()])
        .assert()
        .success();
    bin()
        .arg(&dump)
        .arg("--declarations")
        .assert()
        .success()
        .stdout(MODELS_TRANSCRIPT);
}

#[test]
fn test_parse_error_prints_nothing_on_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_go(&dir, "package m\n\ntype User struct {\n\tName string `json:\"name\"`\n");
    bin()
        .arg(&path)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("syntax error"));
}

#[test]
fn test_missing_file() {
    bin()
        .arg("/definitely/not/here.go")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_unsupported_field_type_aborts_without_partial_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_go(
        &dir,
        concat!(
            "package m\n\ntype Ok struct {\n\tA string `json:\"a\"`\n}\n\n",
            "type Bad struct {\n\tM map[string]int `json:\"m\"`\n}\n",
        ),
    );
    bin()
        .arg(&path)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unsupported data type in field 'M'"))
        .stderr(predicate::str::contains("map[string]int"));
}

#[test]
fn test_array_of_values_aborts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_go(&dir, "package m\n\ntype Users []User\n");
    bin()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("array declaration 'Users'"));
}
