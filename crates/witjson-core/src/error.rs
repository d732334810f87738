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

//! Error types for encoding native values and decoding dynamic values.
//!
//! The two taxonomies are disjoint. An [`EncodingError`] means a native value
//! has no JSON representation, which is a programming or schema error. A
//! [`DecodingError`] means an input tree does not match the expected schema,
//! which is expected for malformed or evolving external input.

use crate::value::ValueKind;
use std::fmt;
use thiserror::Error;

/// Error domain reported alongside encoding error codes.
pub const ENCODING_ERROR_DOMAIN: &str = "ai.wit.json.encodingError";

/// Error domain reported alongside decoding error codes.
pub const DECODING_ERROR_DOMAIN: &str = "ai.wit.json.decodeError";

/// A native value that cannot be represented as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A sequence holds an element of a kind with no JSON form.
    #[error("array element of type `{element_type}` cannot be encoded as JSON")]
    ArrayIncompatible {
        /// Native type name of the offending element.
        element_type: String,
    },

    /// A mapping holds a value of a kind with no JSON form.
    #[error("dictionary value of type `{element_type}` cannot be encoded as JSON")]
    DictionaryIncompatible {
        /// Native type name of the offending value.
        element_type: String,
    },

    /// A structural field holds a value of a kind with no JSON form.
    #[error("property `{key}` of type `{element_type}` cannot be encoded as JSON")]
    PropertyIncompatibleType {
        /// Name of the offending field.
        key: String,
        /// Native type name of the field's value.
        element_type: String,
    },
}

impl EncodingError {
    /// Stable numeric code within [`ENCODING_ERROR_DOMAIN`].
    pub fn code(&self) -> i32 {
        match self {
            Self::ArrayIncompatible { .. } => 1,
            Self::DictionaryIncompatible { .. } => 2,
            Self::PropertyIncompatibleType { .. } => 3,
        }
    }

    /// Native type name carried by the error.
    pub fn element_type(&self) -> &str {
        match self {
            Self::ArrayIncompatible { element_type }
            | Self::DictionaryIncompatible { element_type }
            | Self::PropertyIncompatibleType { element_type, .. } => element_type,
        }
    }
}

/// The kind of a [`DecodingError`], independent of any wrapping context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodingErrorKind {
    /// A required key is absent.
    KeyMissing,
    /// A present value has the wrong scalar kind.
    TypeMismatch,
    /// A value is not an array of the expected element shape.
    ArrayShapeMismatch,
    /// A value is not an object of the expected member shape.
    DictionaryShapeMismatch,
    /// A transformer rejected the raw value.
    ValueNotTransformable,
}

impl fmt::Display for DecodingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyMissing => write!(f, "KeyMissingError"),
            Self::TypeMismatch => write!(f, "TypeMismatchError"),
            Self::ArrayShapeMismatch => write!(f, "ArrayShapeError"),
            Self::DictionaryShapeMismatch => write!(f, "DictionaryShapeError"),
            Self::ValueNotTransformable => write!(f, "NotTransformableError"),
        }
    }
}

/// Position of a nested value relative to its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Member of an object.
    Key(String),
    /// Element of an array.
    Index(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{}", key),
            Self::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// An input tree that does not match the expected schema.
///
/// Nested failures are wrapped in [`DecodingError::At`] as they propagate,
/// so the full path to the offending value is available through
/// [`DecodingError::path`] while [`DecodingError::kind`] still reports the
/// original failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// A required key is absent.
    #[error("key `{key}` is missing")]
    KeyMissing {
        /// The absent key.
        key: String,
    },

    /// A present value has the wrong kind.
    #[error("key `{key}` expected {expected}, found {found}")]
    TypeMismatch {
        /// The offending key.
        key: String,
        /// Kind the caller asked for.
        expected: ValueKind,
        /// Kind actually present.
        found: ValueKind,
    },

    /// A number of the right kind that does not fit the target type.
    ///
    /// Reported with the [`DecodingErrorKind::TypeMismatch`] kind.
    #[error("key `{key}` value {value} is out of range for {target}")]
    OutOfRange {
        /// The offending key.
        key: String,
        /// Raw value rendered as compact JSON.
        value: String,
        /// Name of the target type.
        target: String,
    },

    /// A value is not an array whose elements have the expected kind.
    #[error("{} expected an array of {expected} elements, found {found}", describe_key(.key))]
    ArrayShapeMismatch {
        /// The offending key, if the array was a member of an object.
        key: Option<String>,
        /// Expected element kind.
        expected: ValueKind,
        /// Kind found: the value itself when not an array, otherwise the
        /// first element that does not match.
        found: ValueKind,
    },

    /// A value is not an object whose members have the expected kind.
    #[error("{} expected {}, found {found}", describe_key(.key), describe_members(.expected))]
    DictionaryShapeMismatch {
        /// The offending key, if the object was a member of another object.
        key: Option<String>,
        /// Expected member kind, or `None` when any object is acceptable.
        expected: Option<ValueKind>,
        /// Kind found: the value itself when not an object, otherwise the
        /// first member that does not match.
        found: ValueKind,
    },

    /// A transformer could not turn the raw value into its native type.
    #[error("key `{key}` value {value} cannot be transformed to {target}")]
    ValueNotTransformable {
        /// The offending key.
        key: String,
        /// Raw value rendered as compact JSON.
        value: String,
        /// Name of the transformer's native type.
        target: String,
    },

    /// A failure inside a nested value, tagged with its position.
    #[error("{}", describe_nested(.location, .source))]
    At {
        /// Position of the nested value in its parent.
        location: Location,
        /// The nested failure.
        source: Box<DecodingError>,
    },
}

fn describe_key(key: &Option<String>) -> String {
    match key {
        Some(key) => format!("key `{}`", key),
        None => "value".to_string(),
    }
}

fn describe_members(expected: &Option<ValueKind>) -> String {
    match expected {
        Some(kind) => format!("an object of {} members", kind),
        None => "an object".to_string(),
    }
}

fn describe_nested(location: &Location, source: &DecodingError) -> String {
    let mut path = location.to_string();
    source.write_path(&mut path);
    format!("at {}: {}", path, source.root_cause())
}

impl DecodingError {
    /// Create a missing-key error.
    pub fn key_missing(key: impl Into<String>) -> Self {
        Self::KeyMissing { key: key.into() }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(key: impl Into<String>, expected: ValueKind, found: ValueKind) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(
        key: impl Into<String>,
        value: impl fmt::Display,
        target: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            key: key.into(),
            value: value.to_string(),
            target: target.into(),
        }
    }

    /// Create a value-not-transformable error.
    pub fn not_transformable(
        key: impl Into<String>,
        value: impl fmt::Display,
        target: impl Into<String>,
    ) -> Self {
        Self::ValueNotTransformable {
            key: key.into(),
            value: value.to_string(),
            target: target.into(),
        }
    }

    /// Wrap this error with the object key it occurred under.
    pub fn at_key(self, key: impl Into<String>) -> Self {
        Self::At {
            location: Location::Key(key.into()),
            source: Box::new(self),
        }
    }

    /// Wrap this error with the array index it occurred at.
    pub fn at_index(self, index: usize) -> Self {
        Self::At {
            location: Location::Index(index),
            source: Box::new(self),
        }
    }

    /// The innermost failure, with all positional wrapping removed.
    pub fn root_cause(&self) -> &DecodingError {
        let mut current = self;
        while let Self::At { source, .. } = current {
            current = source;
        }
        current
    }

    /// The kind of the innermost failure.
    pub fn kind(&self) -> DecodingErrorKind {
        match self {
            Self::KeyMissing { .. } => DecodingErrorKind::KeyMissing,
            Self::TypeMismatch { .. } | Self::OutOfRange { .. } => DecodingErrorKind::TypeMismatch,
            Self::ArrayShapeMismatch { .. } => DecodingErrorKind::ArrayShapeMismatch,
            Self::DictionaryShapeMismatch { .. } => DecodingErrorKind::DictionaryShapeMismatch,
            Self::ValueNotTransformable { .. } => DecodingErrorKind::ValueNotTransformable,
            Self::At { source, .. } => source.kind(),
        }
    }

    /// Stable numeric code within [`DECODING_ERROR_DOMAIN`].
    pub fn code(&self) -> i32 {
        match self.kind() {
            DecodingErrorKind::ArrayShapeMismatch => 1,
            DecodingErrorKind::DictionaryShapeMismatch => 2,
            DecodingErrorKind::TypeMismatch => 3,
            DecodingErrorKind::KeyMissing => 4,
            DecodingErrorKind::ValueNotTransformable => 5,
        }
    }

    /// The key named by the innermost failure, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::KeyMissing { key }
            | Self::TypeMismatch { key, .. }
            | Self::OutOfRange { key, .. }
            | Self::ValueNotTransformable { key, .. } => Some(key),
            Self::ArrayShapeMismatch { key, .. } | Self::DictionaryShapeMismatch { key, .. } => {
                key.as_deref()
            }
            Self::At { source, .. } => source.key(),
        }
    }

    /// Dotted path from the outermost decoded object to the failing key,
    /// e.g. `children[1].birthday`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        self.write_path(&mut path);
        path
    }

    fn write_path(&self, path: &mut String) {
        match self {
            Self::At { location, source } => {
                match location {
                    Location::Key(key) => {
                        if !path.is_empty() {
                            path.push('.');
                        }
                        path.push_str(key);
                    }
                    Location::Index(index) => path.push_str(&format!("[{}]", index)),
                }
                source.write_path(path);
            }
            other => {
                if let Some(key) = other.key() {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(key);
                }
            }
        }
    }
}

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodingError>;

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodingError>;
