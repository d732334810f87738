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

//! WitJSON value to JSON conversion

use crate::error::JsonConversionError;
use serde_json::{Map, Number, Value as JsonValue};
use tracing::debug;
use witjson_core::Value;

/// Configuration for JSON output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToJsonConfig {
    /// Indent the output (default: compact)
    pub pretty: bool,
}

impl ToJsonConfig {
    /// Configuration for indented output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

/// Serialize a [`Value`] as JSON text
///
/// Object members are written in key order.
///
/// # Examples
///
/// ```rust
/// use witjson_core::Value;
/// use witjson_json::{to_json, ToJsonConfig};
///
/// let value: Value = vec![("age".to_string(), Value::Int(35))].into_iter().collect();
/// assert_eq!(to_json(&value, &ToJsonConfig::default()).unwrap(), r#"{"age":35}"#);
/// ```
pub fn to_json(value: &Value, config: &ToJsonConfig) -> Result<String, JsonConversionError> {
    let json = to_json_value(value)?;
    let text = if config.pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    text.map_err(|e| JsonConversionError::SerializeError(e.to_string()))
}

/// Convert a [`Value`] into a `serde_json::Value`
///
/// Fails on NaN and infinite floats, which JSON cannot carry.
pub fn to_json_value(value: &Value) -> Result<JsonValue, JsonConversionError> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Int(n) => Ok(JsonValue::Number(Number::from(*n))),
        Value::Float(f) => match Number::from_f64(*f) {
            Some(n) => Ok(JsonValue::Number(n)),
            None => {
                debug!(value = %f, "refusing to write non-finite float");
                Err(JsonConversionError::NonFiniteFloat(*f))
            }
        },
        Value::String(s) => Ok(JsonValue::String(s.clone())),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(to_json_value(item)?);
            }
            Ok(JsonValue::Array(out))
        }
        Value::Object(members) => {
            let mut out = Map::with_capacity(members.len());
            for (key, member) in members {
                out.insert(key.clone(), to_json_value(member)?);
            }
            Ok(JsonValue::Object(out))
        }
    }
}
