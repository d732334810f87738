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

//! Scalar kinds that can be read from and written to a [`Value`] without
//! coercion.
//!
//! A [`Primitive`] is the Rust side of a JSON scalar. Reading is strict: a
//! string is never parsed as a number and a number is never stringified. The
//! one widening allowed is an integer read as a float, since JSON does not
//! distinguish the two.

use crate::value::{Value, ValueKind};

/// A native scalar with a direct JSON form.
pub trait Primitive: Sized {
    /// Wire kind this type is read from.
    const KIND: ValueKind;

    /// Rust type name, used when a value of the right kind does not fit.
    const NAME: &'static str;

    /// Read the scalar, or `None` if the value has a different kind or does
    /// not fit.
    fn from_value(value: &Value) -> Option<Self>;

    /// Write the scalar.
    fn into_value(self) -> Value;
}

impl Primitive for String {
    const KIND: ValueKind = ValueKind::String;
    const NAME: &'static str = "String";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl Primitive for bool {
    const KIND: ValueKind = ValueKind::Bool;
    const NAME: &'static str = "bool";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl Primitive for i64 {
    const KIND: ValueKind = ValueKind::Int;
    const NAME: &'static str = "i64";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

macro_rules! narrow_int_primitive {
    ($($ty:ty),*) => {
        $(
            impl Primitive for $ty {
                const KIND: ValueKind = ValueKind::Int;
                const NAME: &'static str = ::std::stringify!($ty);

                fn from_value(value: &Value) -> Option<Self> {
                    value.as_int().and_then(|n| <$ty>::try_from(n).ok())
                }

                fn into_value(self) -> Value {
                    Value::Int(i64::from(self))
                }
            }
        )*
    };
}

narrow_int_primitive!(i8, i16, i32, u8, u16, u32);

impl Primitive for f64 {
    const KIND: ValueKind = ValueKind::Float;
    const NAME: &'static str = "f64";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl Primitive for f32 {
    const KIND: ValueKind = ValueKind::Float;
    const NAME: &'static str = "f32";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float().map(|n| n as f32)
    }

    fn into_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_not_coerced() {
        assert_eq!(String::from_value(&Value::from("35")), Some("35".to_string()));
        assert_eq!(String::from_value(&Value::Int(35)), None);
        assert_eq!(i64::from_value(&Value::from("35")), None);
    }

    #[test]
    fn test_float_accepts_integer() {
        assert_eq!(f64::from_value(&Value::Int(3)), Some(3.0));
        assert_eq!(f64::from_value(&Value::Float(0.92)), Some(0.92));
        assert_eq!(i64::from_value(&Value::Float(3.0)), None);
    }

    #[test]
    fn test_narrow_integers_reject_out_of_range() {
        assert_eq!(u8::from_value(&Value::Int(255)), Some(255));
        assert_eq!(u8::from_value(&Value::Int(256)), None);
        assert_eq!(u32::from_value(&Value::Int(-1)), None);
        assert_eq!(i32::from_value(&Value::Int(-35)), Some(-35));
    }

    #[test]
    fn test_null_matches_nothing() {
        assert_eq!(bool::from_value(&Value::Null), None);
        assert_eq!(String::from_value(&Value::Null), None);
        assert_eq!(f64::from_value(&Value::Null), None);
    }

    #[test]
    fn test_into_value() {
        assert_eq!(7u16.into_value(), Value::Int(7));
        assert_eq!(true.into_value(), Value::Bool(true));
        assert_eq!("a".to_string().into_value(), Value::from("a"));
        assert_eq!(1.5f32.into_value(), Value::Float(1.5));
    }
}
