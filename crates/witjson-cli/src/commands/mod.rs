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

//! CLI command implementations

mod format;
mod inspect;
mod validate;

pub use format::format;
pub use inspect::{inspect, render_tree};
pub use validate::{validate, RecordKind};

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};

/// Default maximum file size (100 MB)
/// Can be overridden via the WITJSON_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("WITJSON_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than `WITJSON_MAX_FILE_SIZE` bytes (default 100 MB) are
/// rejected before any memory is allocated for them.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is too large, or
/// the content is not UTF-8.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content, followed by a newline, to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, format!("{}\n", content)).map_err(|e| CliError::io_error(p, e)),
        None => {
            let mut stdout = io::stdout();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}
