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

//! Keyed, typed access to the members of an object value.
//!
//! [`JsonDecoder`] is what a [`Decodable`] implementation reads its fields
//! through. Every accessor names the key it reads, checks the member's kind
//! without coercion, and reports failures as [`DecodingError`]s that carry
//! the key. Nested decodes are tagged with their position so the error
//! path leads from the outermost object to the failing member.
//!
//! Required accessors fail on absent keys. Optional accessors treat an
//! absent key and an explicit `null` alike as "no value".

use crate::decode::{check_object_elements, decode_elements, Decodable};
use crate::error::{DecodeResult, DecodingError};
use crate::error_ext::DecodeResultExt;
use crate::primitive::Primitive;
use crate::transform::{Transformable, Transformer};
use crate::value::{Map, Value, ValueKind};
use std::collections::BTreeMap;
use tracing::debug;

/// A decoding view over one object value.
#[derive(Debug, Clone, Copy)]
pub struct JsonDecoder<'a> {
    object: &'a Map,
}

impl<'a> JsonDecoder<'a> {
    /// Open a decoder on `json`, which must be an object.
    pub fn new(json: &'a Value) -> DecodeResult<Self> {
        match json {
            Value::Object(object) => Ok(Self { object }),
            other => Err(failed(DecodingError::DictionaryShapeMismatch {
                key: None,
                expected: None,
                found: other.kind(),
            })),
        }
    }

    /// The underlying members.
    pub fn object(&self) -> &'a Map {
        self.object
    }

    /// Whether `key` is present, including with a `null` value.
    pub fn contains(&self, key: &str) -> bool {
        self.object.contains_key(key)
    }

    /// The raw member under `key`.
    pub fn decode_value(&self, key: &str) -> DecodeResult<&'a Value> {
        self.object
            .get(key)
            .ok_or_else(|| failed(DecodingError::key_missing(key)))
    }

    /// Present, non-null member under `key`.
    fn present(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|value| !value.is_null())
    }

    /// Read a required scalar.
    pub fn decode<P: Primitive>(&self, key: &str) -> DecodeResult<P> {
        let value = self.decode_value(key)?;
        P::from_value(value).ok_or_else(|| {
            failed(if value.kind() == P::KIND {
                DecodingError::out_of_range(key, value, P::NAME)
            } else {
                DecodingError::type_mismatch(key, P::KIND, value.kind())
            })
        })
    }

    /// Read an optional scalar. Absent, null and mistyped members all yield
    /// `None`.
    pub fn decode_optional<P: Primitive>(&self, key: &str) -> Option<P> {
        self.object.get(key).and_then(P::from_value)
    }

    /// Read a required nested object.
    pub fn decode_object<T: Decodable>(&self, key: &str) -> DecodeResult<T> {
        let value = self.decode_value(key)?;
        T::from_json(value).at_key(key)
    }

    /// Read an optional nested object. Absent and null members yield
    /// `None`; a present member must decode.
    pub fn decode_optional_object<T: Decodable>(&self, key: &str) -> DecodeResult<Option<T>> {
        match self.present(key) {
            Some(value) => T::from_json(value).at_key(key).map(Some),
            None => Ok(None),
        }
    }

    /// Read a required array of scalars, all of kind `P`.
    pub fn decode_array<P: Primitive>(&self, key: &str) -> DecodeResult<Vec<P>> {
        let items = self.array_member(key, P::KIND)?;
        items
            .iter()
            .map(|item| match P::from_value(item) {
                Some(value) => Ok(value),
                None if item.kind() == P::KIND => {
                    Err(failed(DecodingError::out_of_range(key, item, P::NAME)))
                }
                None => Err(failed(DecodingError::ArrayShapeMismatch {
                    key: Some(key.to_string()),
                    expected: P::KIND,
                    found: item.kind(),
                })),
            })
            .collect()
    }

    /// Read an optional array of scalars. Absent and null members yield
    /// `None`; a present member must be a well-formed array.
    pub fn decode_optional_array<P: Primitive>(&self, key: &str) -> DecodeResult<Option<Vec<P>>> {
        if self.present(key).is_none() {
            return Ok(None);
        }
        self.decode_array(key).map(Some)
    }

    /// Read a required array of objects. Elements decode in order and the
    /// first failure aborts.
    pub fn decode_object_array<T: Decodable>(&self, key: &str) -> DecodeResult<Vec<T>> {
        let items = self.array_member(key, ValueKind::Object)?;
        check_object_elements(items, Some(key)).map_err(failed)?;
        decode_elements(items).at_key(key)
    }

    /// Read an optional array of objects. Absent and null members yield
    /// `None`.
    pub fn decode_optional_object_array<T: Decodable>(
        &self,
        key: &str,
    ) -> DecodeResult<Option<Vec<T>>> {
        if self.present(key).is_none() {
            return Ok(None);
        }
        self.decode_object_array(key).map(Some)
    }

    /// Read a required object whose members are all scalars of kind `P`.
    pub fn decode_map<P: Primitive>(&self, key: &str) -> DecodeResult<BTreeMap<String, P>> {
        let members = self.object_member(key, P::KIND)?;
        members
            .iter()
            .map(|(name, item)| match P::from_value(item) {
                Some(value) => Ok((name.clone(), value)),
                None if item.kind() == P::KIND => Err(failed(
                    DecodingError::out_of_range(name.as_str(), item, P::NAME).at_key(key),
                )),
                None => Err(failed(DecodingError::DictionaryShapeMismatch {
                    key: Some(key.to_string()),
                    expected: Some(P::KIND),
                    found: item.kind(),
                })),
            })
            .collect()
    }

    /// Read a required object whose members are all objects.
    pub fn decode_object_map<T: Decodable>(&self, key: &str) -> DecodeResult<BTreeMap<String, T>> {
        let members = self.object_member(key, ValueKind::Object)?;
        if let Some(bad) = members.values().find(|item| !item.is_object()) {
            return Err(failed(DecodingError::DictionaryShapeMismatch {
                key: Some(key.to_string()),
                expected: Some(ValueKind::Object),
                found: bad.kind(),
            }));
        }
        members
            .iter()
            .map(|(name, item)| {
                T::from_json(item)
                    .at_key(name)
                    .at_key(key)
                    .map(|value| (name.clone(), value))
            })
            .collect()
    }

    /// Read a required member through `transformer`.
    pub fn decode_with<W: Primitive, N>(
        &self,
        key: &str,
        transformer: &Transformer<W, N>,
    ) -> DecodeResult<N> {
        let value = self.decode_value(key)?;
        transformer.decode_value(value).ok_or_else(|| {
            failed(DecodingError::not_transformable(
                key,
                value,
                transformer.name(),
            ))
        })
    }

    /// Read an optional member through `transformer`. Absent and null
    /// members yield `None`; a present member must transform.
    pub fn decode_optional_with<W: Primitive, N>(
        &self,
        key: &str,
        transformer: &Transformer<W, N>,
    ) -> DecodeResult<Option<N>> {
        if self.present(key).is_none() {
            return Ok(None);
        }
        self.decode_with(key, transformer).map(Some)
    }

    /// Read a required member through its type's bound transformer.
    pub fn decode_transformed<T: Transformable>(&self, key: &str) -> DecodeResult<T> {
        self.decode_with(key, T::transformer())
    }

    /// Read an optional member through its type's bound transformer.
    pub fn decode_optional_transformed<T: Transformable>(
        &self,
        key: &str,
    ) -> DecodeResult<Option<T>> {
        self.decode_optional_with(key, T::transformer())
    }

    fn array_member(&self, key: &str, expected: ValueKind) -> DecodeResult<&'a [Value]> {
        let value = self.decode_value(key)?;
        value.as_array().ok_or_else(|| {
            failed(DecodingError::ArrayShapeMismatch {
                key: Some(key.to_string()),
                expected,
                found: value.kind(),
            })
        })
    }

    fn object_member(&self, key: &str, expected: ValueKind) -> DecodeResult<&'a Map> {
        let value = self.decode_value(key)?;
        value.as_object().ok_or_else(|| {
            failed(DecodingError::DictionaryShapeMismatch {
                key: Some(key.to_string()),
                expected: Some(expected),
                found: value.kind(),
            })
        })
    }
}

fn failed(err: DecodingError) -> DecodingError {
    debug!(kind = %err.kind(), key = ?err.key(), "decode failed: {}", err);
    err
}
