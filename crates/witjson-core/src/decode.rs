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

//! Decoding native values out of the dynamic [`Value`] tree.

use crate::error::{DecodeResult, DecodingError};
use crate::error_ext::DecodeResultExt;
use crate::value::{Value, ValueKind};

/// A native value that can be built from an object-shaped [`Value`].
///
/// Implementations usually open a [`JsonDecoder`](crate::JsonDecoder) on the
/// input and read each field by key:
///
/// ```rust
/// use witjson_core::{Decodable, DecodeResult, JsonDecoder, Value};
///
/// struct Child {
///     name: String,
///     age: i64,
/// }
///
/// impl Decodable for Child {
///     fn from_json(json: &Value) -> DecodeResult<Self> {
///         let decoder = JsonDecoder::new(json)?;
///         Ok(Child {
///             name: decoder.decode("childName")?,
///             age: decoder.decode("childAge")?,
///         })
///     }
/// }
///
/// let json: Value = vec![
///     ("childName".to_string(), Value::from("Joey")),
///     ("childAge".to_string(), Value::Int(11)),
/// ]
/// .into_iter()
/// .collect();
/// let child = Child::from_json(&json).unwrap();
/// assert_eq!(child.name, "Joey");
/// assert_eq!(child.age, 11);
/// ```
pub trait Decodable: Sized {
    /// Build a value from `json`, or report the first schema violation.
    fn from_json(json: &Value) -> DecodeResult<Self>;
}

impl Decodable for Value {
    fn from_json(json: &Value) -> DecodeResult<Self> {
        Ok(json.clone())
    }
}

/// Decode a top-level array whose elements are all objects.
///
/// Fails with an array-shape error if `json` is not an array or holds a
/// non-object element. Otherwise elements are decoded in order and the first
/// failure aborts, tagged with its index.
pub fn decode_array<T: Decodable>(json: &Value) -> DecodeResult<Vec<T>> {
    let items = json
        .as_array()
        .ok_or(DecodingError::ArrayShapeMismatch {
            key: None,
            expected: ValueKind::Object,
            found: json.kind(),
        })?;
    check_object_elements(items, None)?;
    decode_elements(items)
}

pub(crate) fn check_object_elements(items: &[Value], key: Option<&str>) -> DecodeResult<()> {
    match items.iter().find(|item| !item.is_object()) {
        Some(bad) => Err(DecodingError::ArrayShapeMismatch {
            key: key.map(str::to_owned),
            expected: ValueKind::Object,
            found: bad.kind(),
        }),
        None => Ok(()),
    }
}

pub(crate) fn decode_elements<T: Decodable>(items: &[Value]) -> DecodeResult<Vec<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| T::from_json(item).at_index(index))
        .collect()
}
