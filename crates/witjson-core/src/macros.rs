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

//! Declarative helpers for implementing [`Encodable`](crate::Encodable).

/// Implement [`Encodable`](crate::Encodable) for a struct by listing the
/// fields to encode.
///
/// Each entry is a field name, optionally followed by `as "wireName"` when
/// the JSON key differs from the Rust field name. Listed fields are encoded
/// in the structural way: absent options are dropped, everything else is
/// encoded recursively.
///
/// # Examples
///
/// ```rust
/// use witjson_core::{encodable, Encodable, Value};
///
/// struct Child {
///     name: String,
///     age: i64,
///     nickname: Option<String>,
/// }
///
/// encodable!(Child {
///     name as "childName",
///     age as "childAge",
///     nickname,
/// });
///
/// let json = Child { name: "Joey".into(), age: 11, nickname: None }
///     .to_json()
///     .unwrap();
/// assert_eq!(json.get("childName"), Some(&Value::from("Joey")));
/// assert_eq!(json.get("childAge"), Some(&Value::Int(11)));
/// assert!(json.get("nickname").is_none());
/// ```
#[macro_export]
macro_rules! encodable {
    ($ty:ty { $($field:ident $(as $name:literal)?),* $(,)? }) => {
        impl $crate::Encodable for $ty {
            fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field::new(
                            $crate::__field_name!($field $(, $name)?),
                            &self.$field,
                        )
                    ),*
                ]
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_name {
    ($field:ident) => {
        ::std::stringify!($field)
    };
    ($field:ident, $name:literal) => {
        $name
    };
}

#[cfg(test)]
mod tests {
    use crate::{Encodable, Value};

    struct Location {
        lat: f64,
        long: f64,
        city: Option<String>,
    }

    encodable!(Location { lat, long, city });

    struct Renamed {
        msg_id: String,
        text: String,
    }

    encodable!(Renamed {
        msg_id,
        text as "_text",
    });

    #[test]
    fn test_plain_field_names() {
        let json = Location {
            lat: 37.4,
            long: -122.1,
            city: Some("Palo Alto".into()),
        }
        .to_json()
        .unwrap();
        assert_eq!(json.get("lat"), Some(&Value::Float(37.4)));
        assert_eq!(json.get("city"), Some(&Value::from("Palo Alto")));
    }

    #[test]
    fn test_renamed_field() {
        let json = Renamed {
            msg_id: "m1".into(),
            text: "hello".into(),
        }
        .to_json()
        .unwrap();
        assert_eq!(json.get("_text"), Some(&Value::from("hello")));
        assert_eq!(json.get("msg_id"), Some(&Value::from("m1")));
        assert!(json.get("text").is_none());
    }

    #[test]
    fn test_field_listing() {
        let loc = Location {
            lat: 0.0,
            long: 0.0,
            city: None,
        };
        let names: Vec<&str> = loc.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["lat", "long", "city"]);
    }
}
