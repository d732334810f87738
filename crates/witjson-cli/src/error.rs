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

//! Structured error types for the WitJSON CLI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use witjson::{DecodingError, JsonConversionError};

/// The main error type for WitJSON CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The file is not JSON, or breaks a configured limit.
    #[error("JSON error: {0}")]
    Json(String),

    /// The file is JSON but does not decode as the requested record.
    #[error("{record} does not decode at '{path}': {source}")]
    Decode {
        /// Record the file was checked against
        record: String,
        /// Path of the failing key
        path: String,
        source: DecodingError,
    },

    /// Output is not in the requested format (check mode).
    #[error("File is not formatted")]
    NotFormatted,
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn decode(record: impl Into<String>, source: DecodingError) -> Self {
        Self::Decode {
            record: record.into(),
            path: source.path(),
            source,
        }
    }
}

impl From<JsonConversionError> for CliError {
    fn from(err: JsonConversionError) -> Self {
        match err {
            JsonConversionError::Decoding(source) => CliError::decode("value", source),
            other => CliError::Json(other.to_string()),
        }
    }
}
