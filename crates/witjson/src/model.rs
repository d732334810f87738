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

//! Records exchanged with the Wit.ai API.
//!
//! Responses ([`Message`], [`Outcome`], [`Converse`]) are decoded from the
//! service's JSON. Requests carry a [`Context`], which is only ever encoded.
//! Field names follow the wire format, including the leading underscore on
//! `_text`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::OffsetDateTime;
use witjson_core::{
    encodable, Decodable, DecodeResult, EncodeResult, Encodable, JsonDecoder, Transformable,
    Transformer, Value,
};

/// One interpretation of a message.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub text: String,
    pub intent: String,
    pub confidence: f64,
}

encodable!(Outcome {
    text as "_text",
    intent,
    confidence,
});

impl Decodable for Outcome {
    fn from_json(json: &Value) -> DecodeResult<Self> {
        let decoder = JsonDecoder::new(json)?;
        Ok(Outcome {
            text: decoder.decode("_text")?,
            intent: decoder.decode("intent")?,
            confidence: decoder.decode("confidence")?,
        })
    }
}

/// The response to a message request.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub message_id: String,
    pub text: String,
    pub outcomes: Vec<Outcome>,
}

encodable!(Message {
    message_id as "msg_id",
    text as "_text",
    outcomes,
});

impl Decodable for Message {
    fn from_json(json: &Value) -> DecodeResult<Self> {
        let decoder = JsonDecoder::new(json)?;
        Ok(Message {
            message_id: decoder.decode("msg_id")?,
            text: decoder.decode("_text")?,
            outcomes: decoder.decode_object_array("outcomes")?,
        })
    }
}

impl Message {
    /// The outcome with the highest confidence, if any.
    pub fn best_outcome(&self) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

/// What a converse step asks the client to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConverseType {
    /// Merge newly extracted entities into the context.
    Merge,
    /// Show a message to the user.
    Message,
    /// Run a client-side action.
    Action,
    /// The conversation is over.
    Stop,
}

impl ConverseType {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Message => "msg",
            Self::Action => "action",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for ConverseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unknown converse type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown converse type `{0}`")]
pub struct UnknownConverseType(pub String);

impl FromStr for ConverseType {
    type Err = UnknownConverseType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "merge" => Ok(Self::Merge),
            "msg" => Ok(Self::Message),
            "action" => Ok(Self::Action),
            "stop" => Ok(Self::Stop),
            other => Err(UnknownConverseType(other.to_string())),
        }
    }
}

/// Converse type names on the wire.
pub static CONVERSE_TYPE_TRANSFORMER: Transformer<String, ConverseType> =
    Transformer::new("converse type", encode_converse_type, decode_converse_type);

fn encode_converse_type(kind: &ConverseType) -> String {
    kind.as_str().to_string()
}

#[allow(clippy::ptr_arg)]
fn decode_converse_type(raw: &String) -> Option<ConverseType> {
    raw.parse().ok()
}

impl Transformable for ConverseType {
    type Wire = String;

    fn transformer() -> &'static Transformer<String, Self> {
        &CONVERSE_TYPE_TRANSFORMER
    }
}

impl Encodable for ConverseType {
    fn to_json(&self) -> EncodeResult<Value> {
        Ok(CONVERSE_TYPE_TRANSFORMER.encode_value(self))
    }
}

/// One step of a conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Converse {
    pub kind: ConverseType,
    pub msg: Option<String>,
    pub action: Option<String>,
    /// Extracted entities, kept as the raw tree the service sent.
    pub entities: Option<Value>,
    pub confidence: f64,
}

encodable!(Converse {
    kind as "type",
    msg,
    action,
    entities,
    confidence,
});

impl Decodable for Converse {
    fn from_json(json: &Value) -> DecodeResult<Self> {
        let decoder = JsonDecoder::new(json)?;
        Ok(Converse {
            kind: decoder.decode_transformed("type")?,
            msg: decoder.decode_optional("msg"),
            action: decoder.decode_optional("action"),
            entities: decoder.decode_optional_object("entities")?,
            confidence: decoder.decode("confidence")?,
        })
    }
}

/// A geographic position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

encodable!(Location {
    latitude,
    longitude
});

impl Decodable for Location {
    fn from_json(json: &Value) -> DecodeResult<Self> {
        let decoder = JsonDecoder::new(json)?;
        Ok(Location {
            latitude: decoder.decode("latitude")?,
            longitude: decoder.decode("longitude")?,
        })
    }
}

/// A user-defined entity and the phrases that express it.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: String,
    pub expressions: Vec<String>,
}

encodable!(Entity { id, expressions });

impl Decodable for Entity {
    fn from_json(json: &Value) -> DecodeResult<Self> {
        let decoder = JsonDecoder::new(json)?;
        Ok(Entity {
            id: decoder.decode("id")?,
            expressions: decoder.decode_array("expressions")?,
        })
    }
}

/// Client state sent along with a request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Context {
    pub state: Option<Vec<String>>,
    pub reference_time: Option<OffsetDateTime>,
    pub timezone: Option<String>,
    pub location: Option<Location>,
    pub entities: Option<Vec<Entity>>,
}

encodable!(Context {
    state,
    reference_time,
    timezone,
    location,
    entities,
});

impl Decodable for Context {
    fn from_json(json: &Value) -> DecodeResult<Self> {
        let decoder = JsonDecoder::new(json)?;
        Ok(Context {
            state: decoder.decode_optional_array("state")?,
            reference_time: decoder.decode_optional_transformed("reference_time")?,
            timezone: decoder.decode_optional("timezone"),
            location: decoder.decode_optional_object("location")?,
            entities: decoder.decode_optional_object_array("entities")?,
        })
    }
}

impl Context {
    /// A context referenced to the current instant, in UTC.
    pub fn now() -> Self {
        Self {
            reference_time: Some(OffsetDateTime::now_utc()),
            ..Default::default()
        }
    }

    /// Set the timezone name.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Set the location.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some(Location {
            latitude,
            longitude,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use witjson_core::DecodingErrorKind;

    #[test]
    fn test_converse_type_names() {
        for kind in [
            ConverseType::Merge,
            ConverseType::Message,
            ConverseType::Action,
            ConverseType::Stop,
        ] {
            assert_eq!(kind.as_str().parse::<ConverseType>(), Ok(kind));
        }
        assert_eq!(
            "message".parse::<ConverseType>(),
            Err(UnknownConverseType("message".into()))
        );
    }

    #[test]
    fn test_unknown_converse_type_is_error() {
        let err: Box<dyn std::error::Error> = Box::new(UnknownConverseType("dance".into()));
        assert_eq!(err.to_string(), "unknown converse type `dance`");
    }

    #[test]
    fn test_converse_type_encodes_as_string() {
        assert_eq!(ConverseType::Message.to_json().unwrap(), Value::from("msg"));
    }

    #[test]
    fn test_unknown_converse_type_is_not_transformable() {
        let json: Value = vec![
            ("type".to_string(), Value::from("jump")),
            ("confidence".to_string(), Value::Float(0.5)),
        ]
        .into_iter()
        .collect();
        let err = Converse::from_json(&json).unwrap_err();
        assert_eq!(err.kind(), DecodingErrorKind::ValueNotTransformable);
        assert_eq!(err.key(), Some("type"));
    }

    #[test]
    fn test_best_outcome() {
        let outcome = |intent: &str, confidence| Outcome {
            text: "hi".into(),
            intent: intent.into(),
            confidence,
        };
        let message = Message {
            message_id: "1".into(),
            text: "hi".into(),
            outcomes: vec![outcome("greet", 0.4), outcome("hello", 0.9)],
        };
        assert_eq!(message.best_outcome().map(|o| o.intent.as_str()), Some("hello"));
    }

    #[test]
    fn test_empty_context_encodes_empty_object() {
        let json = Context::default().to_json().unwrap();
        assert_eq!(json, Value::Object(Default::default()));
    }

    #[test]
    fn test_context_builder() {
        let context = Context::now()
            .with_timezone("America/Los_Angeles")
            .with_location(37.4419, -122.143);
        assert!(context.reference_time.is_some());
        let json = context.to_json().unwrap();
        assert_eq!(
            json.get("timezone"),
            Some(&Value::from("America/Los_Angeles"))
        );
        assert!(json.get("location").unwrap().is_object());
        assert!(json.get("state").is_none());
    }

    #[test]
    fn test_context_reference_time_wire_form() {
        let context = Context {
            reference_time: Some(datetime!(2016-05-02 08:05:02 -07:00)),
            ..Default::default()
        };
        let json = context.to_json().unwrap();
        assert_eq!(
            json.get("reference_time"),
            Some(&Value::from("2016-05-02T08:05:02-07:00"))
        );
    }
}
