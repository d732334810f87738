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

//! Positional context helpers for decoding results.
//!
//! Nested decodes report failures relative to the object they were given.
//! These extension methods tag a failure with the key or index under which
//! the nested value sits in its parent, so the caller sees the full path.
//!
//! # Examples
//!
//! ```rust
//! use witjson_core::{DecodeResultExt, DecodingError, DecodingErrorKind};
//!
//! fn decode_child() -> Result<(), DecodingError> {
//!     Err(DecodingError::key_missing("childAge"))
//! }
//!
//! let err = decode_child().at_index(1).at_key("children").unwrap_err();
//! assert_eq!(err.path(), "children[1].childAge");
//! assert_eq!(err.kind(), DecodingErrorKind::KeyMissing);
//! ```

use crate::error::DecodingError;

/// Extension trait for tagging `Result<T, DecodingError>` with a position.
pub trait DecodeResultExt<T> {
    /// Tag an error with the object key it occurred under.
    ///
    /// Successful results pass through untouched.
    fn at_key(self, key: &str) -> Result<T, DecodingError>;

    /// Tag an error with the array index it occurred at.
    fn at_index(self, index: usize) -> Result<T, DecodingError>;
}

impl<T> DecodeResultExt<T> for Result<T, DecodingError> {
    fn at_key(self, key: &str) -> Result<T, DecodingError> {
        self.map_err(|e| e.at_key(key))
    }

    fn at_index(self, index: usize) -> Result<T, DecodingError> {
        self.map_err(|e| e.at_index(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodingErrorKind, Location};

    #[test]
    fn test_at_key_on_ok() {
        let result: Result<i32, DecodingError> = Ok(42);
        assert_eq!(result.at_key("age").unwrap(), 42);
    }

    #[test]
    fn test_at_key_wraps_error() {
        let result: Result<(), DecodingError> = Err(DecodingError::key_missing("x"));
        let err = result.at_key("outer").unwrap_err();
        match &err {
            DecodingError::At { location, source } => {
                assert_eq!(location, &Location::Key("outer".into()));
                assert_eq!(**source, DecodingError::key_missing("x"));
            }
            other => panic!("expected wrapper, got {:?}", other),
        }
    }

    #[test]
    fn test_chaining_builds_path() {
        let result: Result<(), DecodingError> = Err(DecodingError::key_missing("birthday"));
        let err = result.at_index(0).at_key("children").unwrap_err();
        assert_eq!(err.path(), "children[0].birthday");
        assert_eq!(err.kind(), DecodingErrorKind::KeyMissing);
    }
}
