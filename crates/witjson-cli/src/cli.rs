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

//! CLI command definitions and argument parsing.

use crate::commands::{self, RecordKind};
use crate::error::CliError;
use clap::Subcommand;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use witjson_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a JSON file
    ///
    /// Checks that the file is well-formed JSON within the configured limits.
    /// With `--as`, also checks that it decodes as the given record and
    /// reports the path of the first failing key.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Record to decode the file as
        #[arg(long = "as", value_enum, value_name = "RECORD")]
        record: Option<RecordKind>,
    },

    /// Format a JSON file
    ///
    /// Parses the file into a value tree and writes it back with sorted keys,
    /// pretty-printed unless `--compact` is given.
    Format {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Write compact output
        #[arg(long)]
        compact: bool,

        /// Check only (exit 1 if the file is not already formatted)
        #[arg(short, long)]
        check: bool,
    },

    /// Print the value tree
    ///
    /// Shows every node with its kind; scalars also show their value.
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Maximum depth to print
        #[arg(short, long)]
        depth: Option<usize>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O fails, the file is not JSON, or it does not
    /// decode as the requested record.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Validate { file, record } => commands::validate(&file, record),
            Commands::Format {
                file,
                output,
                compact,
                check,
            } => commands::format(&file, output.as_deref(), compact, check),
            Commands::Inspect { file, depth } => commands::inspect(&file, depth),
        }
    }
}
