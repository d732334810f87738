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

//! JSON to WitJSON value conversion

use crate::error::JsonConversionError;
use serde_json::Value as JsonValue;
use tracing::debug;
use witjson_core::{Map, Value};

/// Default maximum nesting depth
///
/// serde_json refuses input nested deeper than 128 levels while parsing
/// text, so the default sits just below that.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Default maximum array size
pub const DEFAULT_MAX_ARRAY_SIZE: usize = 10_000_000;

/// Default maximum string length in bytes (100 MB)
pub const DEFAULT_MAX_STRING_LENGTH: usize = 100 * 1024 * 1024;

/// Default maximum object size (number of keys)
pub const DEFAULT_MAX_OBJECT_SIZE: usize = 100_000;

/// Configuration for reading wire JSON
///
/// Every limit is optional; `None` disables it. The defaults are generous
/// enough for any realistic API payload while still bounding memory for
/// hostile input.
///
/// # Examples
///
/// ```rust
/// use witjson_json::FromJsonConfig;
///
/// let strict = FromJsonConfig::builder()
///     .max_depth(16)
///     .max_array_size(1_000)
///     .max_string_length(64 * 1024)
///     .max_object_size(256)
///     .build();
/// assert_eq!(strict.max_depth, Some(16));
///
/// let unlimited = FromJsonConfig::builder().unlimited().build();
/// assert_eq!(unlimited.max_array_size, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromJsonConfig {
    /// Maximum nesting depth (default: 100)
    pub max_depth: Option<usize>,

    /// Maximum array size (default: 10,000,000)
    pub max_array_size: Option<usize>,

    /// Maximum string length in bytes (default: 100 MB)
    pub max_string_length: Option<usize>,

    /// Maximum object size (default: 100,000)
    pub max_object_size: Option<usize>,
}

impl Default for FromJsonConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            max_array_size: Some(DEFAULT_MAX_ARRAY_SIZE),
            max_string_length: Some(DEFAULT_MAX_STRING_LENGTH),
            max_object_size: Some(DEFAULT_MAX_OBJECT_SIZE),
        }
    }
}

impl FromJsonConfig {
    /// Create a new builder for configuring JSON import
    pub fn builder() -> FromJsonConfigBuilder {
        FromJsonConfigBuilder::default()
    }
}

/// Builder for `FromJsonConfig`
#[derive(Debug, Clone)]
pub struct FromJsonConfigBuilder {
    config: FromJsonConfig,
}

impl Default for FromJsonConfigBuilder {
    fn default() -> Self {
        Self {
            config: FromJsonConfig::default(),
        }
    }
}

impl FromJsonConfigBuilder {
    /// Set the maximum nesting depth
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.config.max_depth = Some(limit);
        self
    }

    /// Set the maximum array size
    pub fn max_array_size(mut self, limit: usize) -> Self {
        self.config.max_array_size = Some(limit);
        self
    }

    /// Set the maximum string length in bytes
    pub fn max_string_length(mut self, limit: usize) -> Self {
        self.config.max_string_length = Some(limit);
        self
    }

    /// Set the maximum object size (number of keys)
    pub fn max_object_size(mut self, limit: usize) -> Self {
        self.config.max_object_size = Some(limit);
        self
    }

    /// Disable all limits (only for trusted input)
    pub fn unlimited(mut self) -> Self {
        self.config.max_depth = None;
        self.config.max_array_size = None;
        self.config.max_string_length = None;
        self.config.max_object_size = None;
        self
    }

    /// Build the configuration
    pub fn build(self) -> FromJsonConfig {
        self.config
    }
}

/// Parse JSON text into a [`Value`]
///
/// Any JSON value is accepted at the root, not only objects.
///
/// # Examples
///
/// ```rust
/// use witjson_json::{from_json, FromJsonConfig};
/// use witjson_core::Value;
///
/// let value = from_json(r#"{"age": 35}"#, &FromJsonConfig::default()).unwrap();
/// assert_eq!(value.get("age"), Some(&Value::Int(35)));
/// ```
pub fn from_json(json: &str, config: &FromJsonConfig) -> Result<Value, JsonConversionError> {
    let value: JsonValue = serde_json::from_str(json).map_err(|err| {
        debug!(error = %err, "failed to parse JSON text");
        JsonConversionError::from(err)
    })?;
    from_json_value(&value, config)
}

/// Parse JSON bytes into a [`Value`]
pub fn from_slice(json: &[u8], config: &FromJsonConfig) -> Result<Value, JsonConversionError> {
    let value: JsonValue = serde_json::from_slice(json).map_err(|err| {
        debug!(error = %err, "failed to parse JSON bytes");
        JsonConversionError::from(err)
    })?;
    from_json_value(&value, config)
}

/// Convert a `serde_json::Value` into a [`Value`], enforcing `config`
pub fn from_json_value(
    value: &JsonValue,
    config: &FromJsonConfig,
) -> Result<Value, JsonConversionError> {
    convert(value, config, 0).map_err(|err| {
        if err.is_limit() {
            debug!(error = %err, "JSON input exceeds configured limit");
        }
        err
    })
}

fn convert(
    value: &JsonValue,
    config: &FromJsonConfig,
    depth: usize,
) -> Result<Value, JsonConversionError> {
    if let Some(max_depth) = config.max_depth {
        if depth > max_depth {
            return Err(JsonConversionError::MaxDepthExceeded(max_depth));
        }
    }

    match value {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(u) = n.as_u64() {
                debug!(value = u, "integer outside the signed 64-bit range");
                Err(JsonConversionError::IntegerOutOfRange(u))
            } else {
                Ok(Value::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        JsonValue::String(s) => {
            check_string(s, config)?;
            Ok(Value::String(s.clone()))
        }
        JsonValue::Array(items) => {
            if let Some(max) = config.max_array_size {
                if items.len() > max {
                    return Err(JsonConversionError::MaxArraySizeExceeded(max, items.len()));
                }
            }
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(convert(item, config, depth + 1)?);
            }
            Ok(Value::Array(out))
        }
        JsonValue::Object(members) => {
            if let Some(max) = config.max_object_size {
                if members.len() > max {
                    return Err(JsonConversionError::MaxObjectSizeExceeded(
                        max,
                        members.len(),
                    ));
                }
            }
            let mut out = Map::new();
            for (key, member) in members {
                check_string(key, config)?;
                out.insert(key.clone(), convert(member, config, depth + 1)?);
            }
            Ok(Value::Object(out))
        }
    }
}

fn check_string(s: &str, config: &FromJsonConfig) -> Result<(), JsonConversionError> {
    match config.max_string_length {
        Some(max) if s.len() > max => Err(JsonConversionError::MaxStringLengthExceeded(
            max,
            s.len(),
        )),
        _ => Ok(()),
    }
}
