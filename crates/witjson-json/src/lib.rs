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

//! WitJSON JSON boundary
//!
//! Converts between JSON text (or `serde_json::Value`) and the dynamic
//! [`Value`] tree, and offers one-call typed entry points on top of the
//! [`Encodable`] and [`Decodable`] contracts.
//!
//! # Features
//!
//! - **Configurable Limits**: depth, array size, string length and object
//!   size are bounded while reading untrusted input
//! - **Strict Numbers**: NaN and infinities are rejected on output instead
//!   of being silently replaced
//! - **Typed Entry Points**: [`decode_str`] and [`encode_string`]
//!
//! # Examples
//!
//! ```rust
//! use witjson_core::{Decodable, DecodeResult, JsonDecoder, Value};
//! use witjson_json::decode_str;
//!
//! struct Outcome {
//!     intent: String,
//!     confidence: f64,
//! }
//!
//! impl Decodable for Outcome {
//!     fn from_json(json: &Value) -> DecodeResult<Self> {
//!         let decoder = JsonDecoder::new(json)?;
//!         Ok(Outcome {
//!             intent: decoder.decode("intent")?,
//!             confidence: decoder.decode("confidence")?,
//!         })
//!     }
//! }
//!
//! let outcome: Outcome = decode_str(r#"{"intent": "hello", "confidence": 1}"#).unwrap();
//! assert_eq!(outcome.intent, "hello");
//! assert_eq!(outcome.confidence, 1.0);
//! ```

mod error;
mod from_json;
mod to_json;

pub use error::JsonConversionError;
pub use from_json::{
    from_json, from_json_value, from_slice, FromJsonConfig, FromJsonConfigBuilder,
    DEFAULT_MAX_ARRAY_SIZE, DEFAULT_MAX_DEPTH, DEFAULT_MAX_OBJECT_SIZE, DEFAULT_MAX_STRING_LENGTH,
};
pub use to_json::{to_json, to_json_value, ToJsonConfig};

use witjson_core::{Decodable, Encodable, Value};

/// Parse JSON text with default limits
pub fn parse(json: &str) -> Result<Value, JsonConversionError> {
    from_json(json, &FromJsonConfig::default())
}

/// Parse JSON text and decode it as `T`
pub fn decode_str<T: Decodable>(json: &str) -> Result<T, JsonConversionError> {
    decode_str_with(json, &FromJsonConfig::default())
}

/// Parse JSON text under `config` and decode it as `T`
pub fn decode_str_with<T: Decodable>(
    json: &str,
    config: &FromJsonConfig,
) -> Result<T, JsonConversionError> {
    let value = from_json(json, config)?;
    Ok(T::from_json(&value)?)
}

/// Parse JSON text holding an array of objects and decode each as `T`
pub fn decode_array_str<T: Decodable>(json: &str) -> Result<Vec<T>, JsonConversionError> {
    let value = parse(json)?;
    Ok(witjson_core::decode_array(&value)?)
}

/// Encode `value` and write it as compact JSON text
pub fn encode_string<T: Encodable + ?Sized>(value: &T) -> Result<String, JsonConversionError> {
    encode_string_with(value, &ToJsonConfig::default())
}

/// Encode `value` and write it as JSON text under `config`
pub fn encode_string_with<T: Encodable + ?Sized>(
    value: &T,
    config: &ToJsonConfig,
) -> Result<String, JsonConversionError> {
    let tree = value.to_json()?;
    to_json(&tree, config)
}
