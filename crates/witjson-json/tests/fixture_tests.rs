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

//! End-to-end tests over the parent/child fixtures: wire text to typed
//! records and back.

use witjson_core::{DecodingErrorKind, Encodable, Value};
use witjson_json::{decode_str, encode_string, parse, JsonConversionError};
use witjson_test::samples::{invalid_parents, malformed_json, PARENT_JSON};
use witjson_test::{child_john, parent, parent_value, Child, Parent};

#[test]
fn test_wire_text_decodes_to_fixture() {
    let decoded: Parent = decode_str(PARENT_JSON).unwrap();
    assert_eq!(decoded, parent());
    assert_eq!(decoded.children.len(), 2);
    assert_eq!(decoded.children[0], child_john());
}

#[test]
fn test_wire_text_parses_to_fixture_value() {
    assert_eq!(parse(PARENT_JSON).unwrap(), parent_value());
}

#[test]
fn test_round_trip_law() {
    let original = parent();
    let text = encode_string(&original).unwrap();
    let back: Parent = decode_str(&text).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_encoded_fields() {
    let json = parent().to_json().unwrap();
    assert_eq!(json.get("age"), Some(&Value::Int(35)));
    assert_eq!(json.get("name"), Some(&Value::from("Mason")));
    assert_eq!(
        json.get("birthday"),
        Some(&Value::from("1981-05-02T08:05:02-07:00"))
    );
    assert_eq!(json.get("profilePage"), Some(&Value::from("http://test.com/")));

    let children = json.get("children").and_then(Value::as_array).unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].get("childName"), Some(&Value::from("John")));
    assert_eq!(children[0].get("childAge"), Some(&Value::Int(10)));
    assert_eq!(
        children[0].get("birthday"),
        Some(&Value::from("2006-05-02T08:05:02-07:00"))
    );

    let phones = json.get("phones").and_then(Value::as_object).unwrap();
    assert_eq!(phones.len(), 2);
    assert_eq!(phones["mobile"], Value::from("4155678901"));
}

#[test]
fn test_invalid_parents_report_path() {
    for (name, text, path) in invalid_parents() {
        let err = decode_str::<Parent>(text).unwrap_err();
        match err {
            JsonConversionError::Decoding(inner) => assert_eq!(inner.path(), path, "{}", name),
            other => panic!("{}: unexpected error {:?}", name, other),
        }
    }
}

#[test]
fn test_type_mismatch_is_not_coerced() {
    let err = decode_str::<Parent>(r#"{"age": "not-a-number", "name": "Mason"}"#).unwrap_err();
    match err {
        JsonConversionError::Decoding(inner) => {
            assert_eq!(inner.kind(), DecodingErrorKind::TypeMismatch);
            assert_eq!(inner.key(), Some("age"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_second_child_failure_short_circuits() {
    let text = r#"{"age": 35, "name": "Mason", "children": [
        {"childName": "John", "childAge": 10, "birthday": "2006-05-02T08:05:02-07:00"},
        {"childName": "Joey", "childAge": 11, "birthday": "not a date"},
        {"childName": "Jane"}
    ]}"#;
    let err = decode_str::<Parent>(text).unwrap_err();
    match err {
        JsonConversionError::Decoding(inner) => {
            assert_eq!(inner.kind(), DecodingErrorKind::ValueNotTransformable);
            assert_eq!(inner.path(), "children[1].birthday");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_child_array_decodes_alone() {
    let text = r#"[
        {"childName": "John", "childAge": 10, "birthday": "2006-05-02T08:05:02-07:00"}
    ]"#;
    let children: Vec<Child> = witjson_json::decode_array_str(text).unwrap();
    assert_eq!(children, vec![child_john()]);
}

#[test]
fn test_malformed_text_is_parse_error() {
    for (name, text) in malformed_json() {
        let err = parse(text).unwrap_err();
        assert!(
            matches!(err, JsonConversionError::ParseError(_)),
            "{}: {:?}",
            name,
            err
        );
    }
}
