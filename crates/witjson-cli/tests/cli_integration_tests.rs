// Dweve WitJSON - Typed JSON Marshaling Framework
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;
use witjson_test::samples;

fn witjson_cmd() -> Command {
    Command::cargo_bin("witjson").expect("Failed to find witjson binary")
}

fn create_temp_file(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    witjson_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("WitJSON - typed JSON toolkit"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    witjson_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("witjson"));
}

#[test]
fn test_no_subcommand_fails() {
    witjson_cmd().assert().failure();
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_valid_file() {
    let file = create_temp_file(samples::PARENT_JSON);

    witjson_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Root: object"));
}

#[test]
fn test_validate_as_message() {
    let file = create_temp_file(samples::MESSAGE_JSON);

    witjson_cmd()
        .arg("validate")
        .arg(file.path())
        .arg("--as")
        .arg("message")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record: message"));
}

#[test]
fn test_validate_as_converse_and_context() {
    let converse = create_temp_file(samples::CONVERSE_JSON);
    witjson_cmd()
        .args(["validate", "--as", "converse"])
        .arg(converse.path())
        .assert()
        .success();

    let context = create_temp_file(samples::CONTEXT_JSON);
    witjson_cmd()
        .args(["validate", "--as", "context"])
        .arg(context.path())
        .assert()
        .success();
}

#[test]
fn test_validate_reports_failing_path() {
    let file = create_temp_file(
        r#"{"msg_id": "x", "_text": "hi", "outcomes": [{"_text": "hi", "intent": "greet"}]}"#,
    );

    witjson_cmd()
        .args(["validate", "--as", "message"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stdout(predicate::str::contains("Error: KeyMissingError (code 4)"))
        .stdout(predicate::str::contains("Path: outcomes[0].confidence"))
        .stderr(predicate::str::contains("message does not decode"));
}

#[test]
fn test_validate_unknown_converse_type() {
    let file = create_temp_file(r#"{"type": "dance", "confidence": 1.0}"#);

    witjson_cmd()
        .args(["validate", "--as", "converse"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("NotTransformableError"))
        .stdout(predicate::str::contains("Path: type"));
}

#[test]
fn test_validate_malformed_json() {
    let file = create_temp_file("{\"age\": 35,}");

    witjson_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_validate_nonexistent_file() {
    witjson_cmd()
        .arg("validate")
        .arg("/nonexistent/payload.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_validate_rejects_unknown_record() {
    let file = create_temp_file("{}");

    witjson_cmd()
        .args(["validate", "--as", "parent"])
        .arg(file.path())
        .assert()
        .failure();
}

// ===== Format Command Tests =====

#[test]
fn test_format_pretty_to_stdout() {
    let file = create_temp_file(r#"{"b":1,"a":[true]}"#);

    witjson_cmd()
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout("{\n  \"a\": [\n    true\n  ],\n  \"b\": 1\n}\n");
}

#[test]
fn test_format_compact() {
    let file = create_temp_file("{\n  \"b\": 1,\n  \"a\": null\n}\n");

    witjson_cmd()
        .arg("format")
        .arg(file.path())
        .arg("--compact")
        .assert()
        .success()
        .stdout("{\"a\":null,\"b\":1}\n");
}

#[test]
fn test_format_to_output_file() {
    let input = create_temp_file(samples::MESSAGE_JSON);
    let output = NamedTempFile::new().expect("Failed to create temp file");

    witjson_cmd()
        .arg("format")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success();

    let written = fs::read_to_string(output.path()).expect("Failed to read output");
    assert!(written.starts_with("{\n  \"_text\""));
    assert!(written.ends_with("}\n"));
}

#[test]
fn test_format_check() {
    let formatted = create_temp_file("{\n  \"a\": 1\n}\n");
    witjson_cmd()
        .arg("format")
        .arg(formatted.path())
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("File is formatted"));

    let unformatted = create_temp_file("{\"a\":1}");
    witjson_cmd()
        .arg("format")
        .arg(unformatted.path())
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File is not formatted"));
}

#[test]
fn test_format_rejects_integer_beyond_i64() {
    let file = create_temp_file("{\"id\": 18446744073709551615}\n");

    witjson_cmd()
        .arg("format")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Integer 18446744073709551615 is outside the signed 64-bit range",
        ));

    witjson_cmd()
        .arg("format")
        .arg(file.path())
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the signed 64-bit range"))
        .stderr(predicate::str::contains("not formatted").not());
}

#[test]
fn test_format_keeps_i64_extremes() {
    let file = create_temp_file(r#"{"max":9223372036854775807,"min":-9223372036854775808}"#);

    witjson_cmd()
        .arg("format")
        .arg(file.path())
        .arg("--compact")
        .assert()
        .success()
        .stdout("{\"max\":9223372036854775807,\"min\":-9223372036854775808}\n");
}

// ===== Inspect Command Tests =====

#[test]
fn test_inspect_tree() {
    let file = create_temp_file(samples::PARENT_JSON);

    witjson_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("object (6 members)"))
        .stdout(predicate::str::contains("├── age: integer = 35"))
        .stdout(predicate::str::contains("children: array (2 elements)"))
        .stdout(predicate::str::contains("childName: string = \"Joey\""));
}

#[test]
fn test_inspect_depth() {
    let file = create_temp_file(samples::PARENT_JSON);

    witjson_cmd()
        .arg("inspect")
        .arg(file.path())
        .arg("--depth")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("children: array (2 elements)"))
        .stdout(predicate::str::contains("childName").not());
}

// ===== File Size Limit Tests =====

#[test]
fn test_max_file_size_env() {
    let file = create_temp_file(samples::PARENT_JSON);

    witjson_cmd()
        .env("WITJSON_MAX_FILE_SIZE", "16")
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is too large"));
}
