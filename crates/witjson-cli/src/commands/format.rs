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

//! Format command - JSON re-indentation

use super::{read_file, write_output};
use crate::error::CliError;
use witjson::json::{to_json, ToJsonConfig};
use witjson::parse;

/// Format a JSON file.
///
/// Object keys come out sorted. Output is pretty-printed with two-space
/// indentation unless `compact` is set.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed, holds a value JSON
/// cannot carry, or (in check mode) is not already formatted.
///
/// # Examples
///
/// ```no_run
/// use witjson_cli::commands::format;
///
/// # fn main() -> Result<(), witjson_cli::error::CliError> {
/// format("payload.json", Some("pretty.json"), false, false)?;
/// format("payload.json", None, true, false)?;
/// # Ok(())
/// # }
/// ```
pub fn format(
    file: &str,
    output: Option<&str>,
    compact: bool,
    check: bool,
) -> Result<(), CliError> {
    let content = read_file(file)?;
    let formatted = format_text(&content, compact)?;

    if check {
        let normalized_original = content.replace("\r\n", "\n");
        if formatted.trim() != normalized_original.trim() {
            return Err(CliError::NotFormatted);
        }
        println!("File is formatted");
        Ok(())
    } else {
        write_output(&formatted, output)
    }
}

/// Format JSON text without touching the filesystem.
pub fn format_text(content: &str, compact: bool) -> Result<String, CliError> {
    let value = parse(content)?;
    let config = ToJsonConfig { pretty: !compact };
    Ok(to_json(&value, &config)?)
}
