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

//! Encoding native values into the dynamic [`Value`] tree.
//!
//! A type becomes encodable by implementing [`Encodable`]. The default
//! encoding is structural: the type lists its fields through
//! [`Encodable::fields`] (usually generated with the [`encodable!`] macro)
//! and each field is encoded recursively into an object. A type that needs
//! a different shape overrides [`Encodable::to_json`] instead.
//!
//! Fields whose value reports [`Encodable::is_absent`] (a `None` option) are
//! omitted from the output object rather than written as `null`.
//!
//! [`encodable!`]: crate::encodable

use crate::error::{EncodeResult, EncodingError};
use crate::transform::{Transformable, DATE_TRANSFORMER, URL_TRANSFORMER};
use crate::value::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use time::OffsetDateTime;
use url::Url;

/// A native value with a JSON representation.
pub trait Encodable {
    /// Named fields used by the structural encoding.
    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }

    /// Encode this value. Defaults to an object built from [`fields`].
    ///
    /// [`fields`]: Encodable::fields
    fn to_json(&self) -> EncodeResult<Value> {
        encode_fields(self.fields())
    }

    /// Whether this value stands for "no value". Absent fields are left out
    /// of the enclosing object.
    fn is_absent(&self) -> bool {
        false
    }
}

/// A field value as seen by the structural encoder.
pub enum Reflected<'a> {
    /// A value that knows how to encode itself.
    Encodable(&'a dyn Encodable),
    /// An ordered collection.
    Sequence(Vec<Reflected<'a>>),
    /// A string-keyed collection.
    Mapping(Vec<(String, Reflected<'a>)>),
    /// A value with no JSON form, named by its type.
    Opaque(&'static str),
}

impl<'a> Reflected<'a> {
    /// An opaque value named after `T`.
    pub fn opaque<T: ?Sized>(_value: &T) -> Self {
        Reflected::Opaque(std::any::type_name::<T>())
    }

    /// Encode as the value of field `key`.
    pub fn encode(&self, key: &str) -> EncodeResult<Value> {
        match self {
            Reflected::Encodable(value) => value.to_json(),
            Reflected::Sequence(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    if let Reflected::Opaque(element_type) = item {
                        return Err(EncodingError::ArrayIncompatible {
                            element_type: (*element_type).to_string(),
                        });
                    }
                    out.push(item.encode(key)?);
                }
                Ok(Value::Array(out))
            }
            Reflected::Mapping(entries) => {
                let mut out = Map::new();
                for (name, item) in entries {
                    match item {
                        Reflected::Opaque(element_type) => {
                            return Err(EncodingError::DictionaryIncompatible {
                                element_type: (*element_type).to_string(),
                            })
                        }
                        Reflected::Encodable(value) if value.is_absent() => continue,
                        _ => {}
                    }
                    out.insert(name.clone(), item.encode(key)?);
                }
                Ok(Value::Object(out))
            }
            Reflected::Opaque(element_type) => Err(EncodingError::PropertyIncompatibleType {
                key: key.to_string(),
                element_type: (*element_type).to_string(),
            }),
        }
    }

    fn is_absent(&self) -> bool {
        matches!(self, Reflected::Encodable(value) if value.is_absent())
    }
}

/// One named field of a structurally encoded value.
pub struct Field<'a> {
    name: &'static str,
    value: Reflected<'a>,
}

impl<'a> Field<'a> {
    /// A field holding an encodable value.
    pub fn new(name: &'static str, value: &'a dyn Encodable) -> Self {
        Self::reflected(name, Reflected::Encodable(value))
    }

    /// A field holding an arbitrary reflected value.
    pub fn reflected(name: &'static str, value: Reflected<'a>) -> Self {
        Self { name, value }
    }

    /// A field whose value has no JSON form.
    pub fn opaque<T: ?Sized>(name: &'static str, value: &T) -> Self {
        Self::reflected(name, Reflected::opaque(value))
    }

    /// Wire name of the field.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field's value.
    pub fn value(&self) -> &Reflected<'a> {
        &self.value
    }
}

/// Build an object from `fields`, skipping absent ones.
///
/// Fails on the first field whose value cannot be encoded.
pub fn encode_fields(fields: Vec<Field<'_>>) -> EncodeResult<Value> {
    let mut object = Map::new();
    for field in fields {
        if field.value.is_absent() {
            continue;
        }
        let value = field.value.encode(field.name)?;
        object.insert(field.name.to_string(), value);
    }
    Ok(Value::Object(object))
}

/// Encode a [`Transformable`] value through its bound transformer.
pub fn encode_transformed<T: Transformable>(value: &T) -> Value {
    T::transformer().encode_value(value)
}

impl Encodable for Value {
    fn to_json(&self) -> EncodeResult<Value> {
        Ok(self.clone())
    }
}

impl Encodable for bool {
    fn to_json(&self) -> EncodeResult<Value> {
        Ok(Value::Bool(*self))
    }
}

impl Encodable for str {
    fn to_json(&self) -> EncodeResult<Value> {
        Ok(Value::String(self.to_string()))
    }
}

impl Encodable for String {
    fn to_json(&self) -> EncodeResult<Value> {
        Ok(Value::String(self.clone()))
    }
}

macro_rules! encodable_int {
    ($($ty:ty),*) => {
        $(
            impl Encodable for $ty {
                fn to_json(&self) -> EncodeResult<Value> {
                    Ok(Value::Int(i64::from(*self)))
                }
            }
        )*
    };
}

encodable_int!(i8, i16, i32, i64, u8, u16, u32);

// Values beyond the i64 range are written as floats.
macro_rules! encodable_wide_int {
    ($($ty:ty),*) => {
        $(
            impl Encodable for $ty {
                fn to_json(&self) -> EncodeResult<Value> {
                    Ok(match i64::try_from(*self) {
                        Ok(n) => Value::Int(n),
                        Err(_) => Value::Float(*self as f64),
                    })
                }
            }
        )*
    };
}

encodable_wide_int!(u64, usize, isize);

impl Encodable for f32 {
    fn to_json(&self) -> EncodeResult<Value> {
        Ok(Value::Float(f64::from(*self)))
    }
}

impl Encodable for f64 {
    fn to_json(&self) -> EncodeResult<Value> {
        Ok(Value::Float(*self))
    }
}

impl<T: Encodable> Encodable for Option<T> {
    fn to_json(&self) -> EncodeResult<Value> {
        match self {
            Some(value) => value.to_json(),
            None => Ok(Value::Null),
        }
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Encodable> Encodable for [T] {
    fn to_json(&self) -> EncodeResult<Value> {
        let mut out = Vec::with_capacity(self.len());
        for item in self {
            out.push(item.to_json()?);
        }
        Ok(Value::Array(out))
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn to_json(&self) -> EncodeResult<Value> {
        self.as_slice().to_json()
    }
}

impl<T: Encodable> Encodable for BTreeMap<String, T> {
    fn to_json(&self) -> EncodeResult<Value> {
        encode_entries(self.iter())
    }
}

impl<T: Encodable, S: BuildHasher> Encodable for HashMap<String, T, S> {
    fn to_json(&self) -> EncodeResult<Value> {
        encode_entries(self.iter())
    }
}

fn encode_entries<'a, T, I>(entries: I) -> EncodeResult<Value>
where
    T: Encodable + 'a,
    I: Iterator<Item = (&'a String, &'a T)>,
{
    let mut out = Map::new();
    for (key, value) in entries {
        if value.is_absent() {
            continue;
        }
        out.insert(key.clone(), value.to_json()?);
    }
    Ok(Value::Object(out))
}

impl<T: Encodable + ?Sized> Encodable for Box<T> {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }

    fn to_json(&self) -> EncodeResult<Value> {
        (**self).to_json()
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Encodable + ?Sized> Encodable for &T {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }

    fn to_json(&self) -> EncodeResult<Value> {
        (**self).to_json()
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl Encodable for OffsetDateTime {
    fn to_json(&self) -> EncodeResult<Value> {
        Ok(DATE_TRANSFORMER.encode_value(self))
    }
}

impl Encodable for Url {
    fn to_json(&self) -> EncodeResult<Value> {
        Ok(URL_TRANSFORMER.encode_value(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    struct Point {
        x: i64,
        label: Option<String>,
    }

    impl Encodable for Point {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::new("x", &self.x), Field::new("label", &self.label)]
        }
    }

    struct Handle;

    #[test]
    fn test_structural_encoding() {
        let point = Point {
            x: 3,
            label: Some("origin".into()),
        };
        let json = point.to_json().unwrap();
        assert_eq!(json.get("x"), Some(&Value::Int(3)));
        assert_eq!(json.get("label"), Some(&Value::from("origin")));
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let point = Point { x: 1, label: None };
        let json = point.to_json().unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert!(json.get("label").is_none());
    }

    #[test]
    fn test_no_fields_encodes_empty_object() {
        struct Empty;
        impl Encodable for Empty {}
        assert_eq!(Empty.to_json().unwrap(), Value::Object(Map::new()));
    }

    #[test]
    fn test_standalone_none_is_null() {
        let value: Option<i64> = None;
        assert_eq!(value.to_json().unwrap(), Value::Null);
    }

    #[test]
    fn test_collections() {
        let list = vec![Some(1i32), None];
        assert_eq!(
            list.to_json().unwrap(),
            Value::Array(vec![Value::Int(1), Value::Null])
        );

        let mut phones = HashMap::new();
        phones.insert("home".to_string(), "1233211234".to_string());
        let json = phones.to_json().unwrap();
        assert_eq!(json.get("home"), Some(&Value::from("1233211234")));
    }

    #[test]
    fn test_nested_encodable() {
        let points = vec![Point { x: 1, label: None }, Point { x: 2, label: None }];
        let json = points.to_json().unwrap();
        assert_eq!(json.as_array().unwrap()[1].get("x"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_transformed_fields() {
        let date = datetime!(1981-05-02 08:05:02 -07:00);
        assert_eq!(
            date.to_json().unwrap(),
            Value::from("1981-05-02T08:05:02-07:00")
        );
        let url = Url::parse("https://wit.ai/").unwrap();
        assert_eq!(encode_transformed(&url), Value::from("https://wit.ai/"));
    }

    #[test]
    fn test_opaque_field_is_property_error() {
        struct Holder {
            handle: Handle,
        }
        impl Encodable for Holder {
            fn fields(&self) -> Vec<Field<'_>> {
                vec![Field::opaque("handle", &self.handle)]
            }
        }
        let err = Holder { handle: Handle }.to_json().unwrap_err();
        assert_eq!(err.code(), 3);
        match err {
            EncodingError::PropertyIncompatibleType { key, element_type } => {
                assert_eq!(key, "handle");
                assert!(element_type.ends_with("Handle"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_opaque_sequence_element_is_array_error() {
        let handle = Handle;
        let one = 1i64;
        let fields = vec![Field::reflected(
            "items",
            Reflected::Sequence(vec![Reflected::Encodable(&one), Reflected::opaque(&handle)]),
        )];
        let err = encode_fields(fields).unwrap_err();
        assert!(matches!(err, EncodingError::ArrayIncompatible { .. }));
        assert_eq!(err.code(), 1);
    }

    #[test]
    fn test_opaque_mapping_value_is_dictionary_error() {
        let handle = Handle;
        let fields = vec![Field::reflected(
            "lookup",
            Reflected::Mapping(vec![("h".to_string(), Reflected::opaque(&handle))]),
        )];
        let err = encode_fields(fields).unwrap_err();
        assert!(matches!(err, EncodingError::DictionaryIncompatible { .. }));
        assert_eq!(err.code(), 2);
    }

    #[test]
    fn test_first_failure_aborts() {
        let handle = Handle;
        let fields = vec![
            Field::opaque("first", &handle),
            Field::reflected("second", Reflected::Sequence(vec![Reflected::opaque(&handle)])),
        ];
        let err = encode_fields(fields).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::PropertyIncompatibleType { ref key, .. } if key == "first"
        ));
    }

    #[test]
    fn test_overridden_encoding() {
        enum Mode {
            Merge,
        }
        impl Encodable for Mode {
            fn to_json(&self) -> EncodeResult<Value> {
                match self {
                    Mode::Merge => Ok(Value::from("merge")),
                }
            }
        }
        assert_eq!(Mode::Merge.to_json().unwrap(), Value::from("merge"));
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(7usize.to_json().unwrap(), Value::Int(7));
        assert_eq!(u64::MAX.to_json().unwrap(), Value::Float(u64::MAX as f64));
    }
}
