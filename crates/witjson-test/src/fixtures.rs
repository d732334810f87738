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

//! A parent/child record pair exercising every field shape.
//!
//! `Parent` carries scalars, a nested array of records, a string map, a date
//! and a URL. `Child` carries scalars and a date.

use std::collections::BTreeMap;
use time::macros::datetime;
use time::OffsetDateTime;
use url::Url;
use witjson_core::{
    encodable, Decodable, DecodeResult, JsonDecoder, Map, Value, DATE_TRANSFORMER,
    URL_TRANSFORMER,
};

/// A record nested inside [`Parent`].
#[derive(Debug, Clone, PartialEq)]
pub struct Child {
    pub child_name: String,
    pub child_age: i64,
    pub birthday: OffsetDateTime,
}

encodable!(Child {
    child_name as "childName",
    child_age as "childAge",
    birthday,
});

impl Decodable for Child {
    fn from_json(json: &Value) -> DecodeResult<Self> {
        let decoder = JsonDecoder::new(json)?;
        Ok(Child {
            child_name: decoder.decode("childName")?,
            child_age: decoder.decode("childAge")?,
            birthday: decoder.decode_with("birthday", &DATE_TRANSFORMER)?,
        })
    }
}

/// The outer record.
#[derive(Debug, Clone, PartialEq)]
pub struct Parent {
    pub age: i64,
    pub name: String,
    pub children: Vec<Child>,
    pub phones: BTreeMap<String, String>,
    pub birthday: OffsetDateTime,
    pub profile_page: Url,
}

encodable!(Parent {
    age,
    name,
    children,
    phones,
    birthday,
    profile_page as "profilePage",
});

impl Decodable for Parent {
    fn from_json(json: &Value) -> DecodeResult<Self> {
        let decoder = JsonDecoder::new(json)?;
        Ok(Parent {
            age: decoder.decode("age")?,
            name: decoder.decode("name")?,
            children: decoder.decode_object_array("children")?,
            phones: decoder.decode_map("phones")?,
            birthday: decoder.decode_with("birthday", &DATE_TRANSFORMER)?,
            profile_page: decoder.decode_with("profilePage", &URL_TRANSFORMER)?,
        })
    }
}

/// John, 10, born 2006-05-02T08:05:02-07:00.
pub fn child_john() -> Child {
    Child {
        child_name: "John".to_string(),
        child_age: 10,
        birthday: datetime!(2006-05-02 08:05:02 -07:00),
    }
}

/// Joey, 11, born 2005-05-02T08:05:02-07:00.
pub fn child_joey() -> Child {
    Child {
        child_name: "Joey".to_string(),
        child_age: 11,
        birthday: datetime!(2005-05-02 08:05:02 -07:00),
    }
}

/// Mason, 35, with two children, two phones and a profile page.
pub fn parent() -> Parent {
    let mut phones = BTreeMap::new();
    phones.insert("home".to_string(), "1233211234".to_string());
    phones.insert("mobile".to_string(), "4155678901".to_string());
    Parent {
        age: 35,
        name: "Mason".to_string(),
        children: vec![child_john(), child_joey()],
        phones,
        birthday: datetime!(1981-05-02 08:05:02 -07:00),
        profile_page: Url::parse("http://test.com").expect("valid fixture URL"),
    }
}

fn object(members: Vec<(&str, Value)>) -> Value {
    members
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn child_value(name: &str, age: i64, birthday: &str) -> Value {
    object(vec![
        ("childName", Value::from(name)),
        ("childAge", Value::Int(age)),
        ("birthday", Value::from(birthday)),
    ])
}

/// The value tree a wire document for [`parent`] parses into.
pub fn parent_value() -> Value {
    let mut phones = Map::new();
    phones.insert("home".to_string(), Value::from("1233211234"));
    phones.insert("mobile".to_string(), Value::from("4155678901"));
    object(vec![
        ("age", Value::Int(35)),
        ("name", Value::from("Mason")),
        ("phones", Value::Object(phones)),
        ("birthday", Value::from("1981-05-02T08:05:02-07:00")),
        ("profilePage", Value::from("http://test.com")),
        (
            "children",
            Value::Array(vec![
                child_value("John", 10, "2006-05-02T08:05:02-07:00"),
                child_value("Joey", 11, "2005-05-02T08:05:02-07:00"),
            ]),
        ),
    ])
}
