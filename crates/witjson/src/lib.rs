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

//! # WitJSON - typed JSON marshaling
//!
//! WitJSON moves values between native Rust types and JSON through a
//! dynamic [`Value`] tree. Encoding is structural by default: a type lists
//! its fields once and gets an object encoding for free. Decoding is
//! explicit and strict: a [`Decodable`] type reads each field through a
//! [`JsonDecoder`], which never coerces and always names the failing key.
//!
//! ## Quick Start
//!
//! ```rust
//! use witjson::{decode_str, encodable, encode_string, Decodable, DecodeResult, JsonDecoder, Value};
//!
//! #[derive(Debug, PartialEq)]
//! struct Child {
//!     name: String,
//!     age: i64,
//! }
//!
//! encodable!(Child { name as "childName", age as "childAge" });
//!
//! impl Decodable for Child {
//!     fn from_json(json: &Value) -> DecodeResult<Self> {
//!         let decoder = JsonDecoder::new(json)?;
//!         Ok(Child {
//!             name: decoder.decode("childName")?,
//!             age: decoder.decode("childAge")?,
//!         })
//!     }
//! }
//!
//! let child = Child { name: "John".into(), age: 10 };
//! let text = encode_string(&child).unwrap();
//! assert_eq!(text, r#"{"childAge":10,"childName":"John"}"#);
//! assert_eq!(decode_str::<Child>(&text).unwrap(), child);
//! ```
//!
//! ## Modules
//!
//! - [`json`]: wire text conversion and limits
//! - [`transform`]: date and URL transformers
//! - [`model`]: Wit.ai response and request records

pub use witjson_core::{
    decode_array, encodable, encode_fields, encode_transformed, Decodable, DecodeResult,
    DecodeResultExt, DecodingError, DecodingErrorKind, EncodeResult, Encodable, EncodingError,
    Field, JsonDecoder, Location, Map, Primitive, Reflected, Transformable, Transformer, Value,
    ValueKind, DATE_TRANSFORMER, DECODING_ERROR_DOMAIN, ENCODING_ERROR_DOMAIN, URL_TRANSFORMER,
};
pub use witjson_json::JsonConversionError;

pub mod model;

pub mod transform {
    //! Wire/native transformers
    pub use witjson_core::transform::{
        Transformable, Transformer, DATE_TRANSFORMER, URL_TRANSFORMER,
    };
}

pub mod json {
    //! JSON text conversion
    pub use witjson_json::{
        decode_array_str, decode_str_with, encode_string_with, from_json, from_json_value,
        from_slice, to_json, to_json_value, FromJsonConfig, FromJsonConfigBuilder,
        JsonConversionError, ToJsonConfig, DEFAULT_MAX_ARRAY_SIZE, DEFAULT_MAX_DEPTH,
        DEFAULT_MAX_OBJECT_SIZE, DEFAULT_MAX_STRING_LENGTH,
    };
}

/// Parse JSON text into a [`Value`] with default limits.
///
/// # Examples
///
/// ```rust
/// use witjson::{parse, Value};
///
/// let value = parse(r#"{"confidence": 0.92}"#).unwrap();
/// assert_eq!(value.get("confidence"), Some(&Value::Float(0.92)));
/// ```
#[inline]
pub fn parse(json: &str) -> Result<Value, JsonConversionError> {
    witjson_json::parse(json)
}

/// Parse JSON text and decode it as `T`.
#[inline]
pub fn decode_str<T: Decodable>(json: &str) -> Result<T, JsonConversionError> {
    witjson_json::decode_str(json)
}

/// Encode `value` as compact JSON text.
#[inline]
pub fn encode_string<T: Encodable + ?Sized>(value: &T) -> Result<String, JsonConversionError> {
    witjson_json::encode_string(value)
}

/// Write a [`Value`] as compact JSON text.
///
/// # Examples
///
/// ```rust
/// use witjson::{to_string, Value};
///
/// assert_eq!(to_string(&Value::Array(vec![Value::Int(1)])).unwrap(), "[1]");
/// ```
#[inline]
pub fn to_string(value: &Value) -> Result<String, JsonConversionError> {
    witjson_json::to_json(value, &json::ToJsonConfig::default())
}
