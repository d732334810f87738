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

//! Property-based tests for the wire boundary.

use proptest::prelude::*;
use witjson_core::Value;
use witjson_json::{from_json, to_json, FromJsonConfig, ToJsonConfig};

/// Generate finite value trees a few levels deep
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        // quarters survive text exactly
        (-1_000_000i64..1_000_000).prop_map(|n| Value::Float(n as f64 / 4.0)),
        "[a-zA-Z0-9 _\\-\"\\\\]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..8).prop_map(Value::Object),
        ]
    })
}

proptest! {
    /// Property: text written from a value parses back to the same value
    #[test]
    fn prop_text_round_trip(value in arb_value(), pretty in any::<bool>()) {
        let config = ToJsonConfig { pretty };
        let text = to_json(&value, &config).unwrap();
        let back = from_json(&text, &FromJsonConfig::default()).unwrap();
        prop_assert_eq!(back, value);
    }

    /// Property: Display output is valid JSON for the same value
    #[test]
    fn prop_display_is_json(value in arb_value()) {
        let back = from_json(&value.to_string(), &FromJsonConfig::default()).unwrap();
        prop_assert_eq!(back, value);
    }

    /// Property: arbitrary text never panics the parser
    #[test]
    fn prop_parse_no_panic(text in ".{0,64}") {
        let _ = from_json(&text, &FromJsonConfig::default());
    }
}
