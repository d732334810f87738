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

//! Errors raised at the wire boundary.

use witjson_core::{DecodingError, EncodingError};

/// Errors that can occur converting between JSON text and WitJSON values
#[derive(Debug, Clone, thiserror::Error)]
pub enum JsonConversionError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    ParseError(String),

    /// JSON serialization failed
    #[error("JSON serialization error: {0}")]
    SerializeError(String),

    /// A float with no JSON representation (NaN or infinity)
    #[error("Non-finite number {0} cannot be written as JSON")]
    NonFiniteFloat(f64),

    /// An integer outside the signed 64-bit range
    #[error("Integer {0} is outside the signed 64-bit range")]
    IntegerOutOfRange(u64),

    /// Maximum recursion depth exceeded
    #[error("Maximum recursion depth ({0}) exceeded - possible deeply nested structure")]
    MaxDepthExceeded(usize),

    /// Maximum array size exceeded
    #[error("Maximum array size ({0}) exceeded - array has {1} elements")]
    MaxArraySizeExceeded(usize, usize),

    /// Maximum string length exceeded
    #[error("Maximum string length ({0}) exceeded - string has {1} bytes")]
    MaxStringLengthExceeded(usize, usize),

    /// Maximum object size exceeded
    #[error("Maximum object size ({0}) exceeded - object has {1} keys")]
    MaxObjectSizeExceeded(usize, usize),

    /// The value tree did not match the requested type
    #[error(transparent)]
    Decoding(#[from] DecodingError),

    /// The native value could not be encoded
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

impl From<serde_json::Error> for JsonConversionError {
    fn from(err: serde_json::Error) -> Self {
        JsonConversionError::ParseError(err.to_string())
    }
}

impl JsonConversionError {
    /// Whether the error is one of the configured size limits.
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            Self::MaxDepthExceeded(_)
                | Self::MaxArraySizeExceeded(..)
                | Self::MaxStringLengthExceeded(..)
                | Self::MaxObjectSizeExceeded(..)
        )
    }
}
