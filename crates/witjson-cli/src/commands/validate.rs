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

//! Validate command - JSON well-formedness and record decoding

use super::read_file;
use crate::error::CliError;
use clap::ValueEnum;
use colored::Colorize;
use witjson::model::{Context, Converse, Message, Outcome};
use witjson::{parse, Decodable, DecodingError, Value};

/// Records a file can be validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    /// A message response (`msg_id`, `_text`, `outcomes`)
    Message,
    /// A single outcome (`_text`, `intent`, `confidence`)
    Outcome,
    /// A converse step (`type`, `msg`, `action`, `entities`, `confidence`)
    Converse,
    /// A request context
    Context,
}

impl RecordKind {
    /// Lowercase record name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Outcome => "outcome",
            Self::Converse => "converse",
            Self::Context => "context",
        }
    }

    fn check(self, value: &Value) -> Result<(), DecodingError> {
        match self {
            Self::Message => decodes::<Message>(value),
            Self::Outcome => decodes::<Outcome>(value),
            Self::Converse => decodes::<Converse>(value),
            Self::Context => decodes::<Context>(value),
        }
    }
}

fn decodes<T: Decodable>(value: &Value) -> Result<(), DecodingError> {
    T::from_json(value).map(|_| ())
}

/// Validate a JSON file, optionally against a record.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, is not JSON, or does not decode
/// as `record`.
///
/// # Output
///
/// Prints ✓ or ✗ with the file name, the root kind and, for a failed
/// decode, the error kind, code and path.
pub fn validate(file: &str, record: Option<RecordKind>) -> Result<(), CliError> {
    let content = read_file(file)?;

    let value = match parse(&content) {
        Ok(value) => value,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            return Err(e.into());
        }
    };

    if let Some(record) = record {
        if let Err(e) = record.check(&value) {
            println!("{} {}", "✗".red().bold(), file);
            println!("  Record: {}", record.name());
            println!("  Error: {} (code {})", e.kind(), e.code());
            println!("  Path: {}", e.path());
            return Err(CliError::decode(record.name(), e));
        }
    }

    println!("{} {}", "✓".green().bold(), file);
    println!("  Root: {}", value.kind());
    if let Some(record) = record {
        println!("  Record: {}", record.name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_names() {
        assert_eq!(RecordKind::Message.name(), "message");
        assert_eq!(RecordKind::Context.name(), "context");
    }

    #[test]
    fn test_check_dispatch() {
        let value = parse(r#"{"_text": "hi", "intent": "greet", "confidence": 1}"#).unwrap();
        assert!(RecordKind::Outcome.check(&value).is_ok());
        assert!(RecordKind::Context.check(&value).is_ok());
        let err = RecordKind::Message.check(&value).unwrap_err();
        assert_eq!(err.key(), Some("msg_id"));
    }
}
