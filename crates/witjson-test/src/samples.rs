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

//! Wire documents, valid and otherwise.

/// The parent fixture as it arrives on the wire.
pub const PARENT_JSON: &str = r#"{
  "age": 35,
  "name": "Mason",
  "phones": {"home": "1233211234", "mobile": "4155678901"},
  "birthday": "1981-05-02T08:05:02-07:00",
  "profilePage": "http://test.com",
  "children": [
    {"childName": "John", "childAge": 10, "birthday": "2006-05-02T08:05:02-07:00"},
    {"childName": "Joey", "childAge": 11, "birthday": "2005-05-02T08:05:02-07:00"}
  ]
}"#;

/// A message response with two outcomes.
pub const MESSAGE_JSON: &str = r#"{
  "msg_id": "b9ae0d83-ec1d-4e70-aa2b-2a9e7b5e3b1d",
  "_text": "what's the weather in Paris",
  "outcomes": [
    {"_text": "what's the weather in Paris", "intent": "weather", "confidence": 0.92},
    {"_text": "what's the weather in Paris", "intent": "travel", "confidence": 0.05}
  ]
}"#;

/// A converse step asking the client to run an action.
pub const CONVERSE_JSON: &str = r#"{
  "type": "action",
  "action": "fetch-forecast",
  "entities": {"location": [{"value": "Paris", "confidence": 0.98}]},
  "confidence": 0.87
}"#;

/// A client context with every optional field present.
pub const CONTEXT_JSON: &str = r#"{
  "state": ["awaiting_location"],
  "reference_time": "2016-05-02T08:05:02-07:00",
  "timezone": "America/Los_Angeles",
  "location": {"latitude": 37.4419, "longitude": -122.143},
  "entities": [{"id": "city", "expressions": ["Paris", "City of Light"]}]
}"#;

/// Text that is not JSON at all.
pub fn malformed_json() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "   \n\t"),
        ("unclosed_object", "{\"age\": 35"),
        ("unclosed_string", "{\"name\": \"Mason}"),
        ("trailing_comma", "{\"age\": 35,}"),
        ("single_quotes", "{'age': 35}"),
        ("bare_word", "Mason"),
        ("nan_literal", "{\"confidence\": NaN}"),
    ]
}

/// Valid JSON that does not describe a parent.
///
/// Each tuple is (name, json, error path the decoder reports).
pub fn invalid_parents() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("missing_age", r#"{"name": "Mason"}"#, "age"),
        ("age_as_string", r#"{"age": "35"}"#, "age"),
        (
            "bad_birthday",
            r#"{"age": 35, "name": "Mason", "phones": {}, "birthday": "02/05/1981", "profilePage": "http://test.com", "children": []}"#,
            "birthday",
        ),
        (
            "child_missing_age",
            r#"{"age": 35, "name": "Mason", "children": [{"childName": "John", "childAge": 10, "birthday": "2006-05-02T08:05:02-07:00"}, {"childName": "Joey", "birthday": "2005-05-02T08:05:02-07:00"}]}"#,
            "children[1].childAge",
        ),
        (
            "children_not_objects",
            r#"{"age": 35, "name": "Mason", "children": [1, 2]}"#,
            "children",
        ),
        (
            "phone_not_string",
            r#"{"age": 35, "name": "Mason", "children": [], "phones": {"home": 1233211234}}"#,
            "phones",
        ),
    ]
}
