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

//! WitJSON Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use witjson_cli::cli::Commands;

/// WitJSON - typed JSON toolkit for Wit.ai payloads
///
/// # Examples
///
/// ```bash
/// # Check that a response decodes as a message
/// witjson validate response.json --as message
///
/// # Re-indent a payload
/// witjson format payload.json --output pretty.json
///
/// # Show the value tree with node kinds
/// witjson inspect payload.json
/// ```
#[derive(Parser)]
#[command(name = "witjson")]
#[command(author, version, about = "WitJSON - typed JSON toolkit for Wit.ai payloads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    // RUST_LOG=witjson_core=debug shows individual decode failures
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
