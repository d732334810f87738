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

//! WitJSON CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **validate**: check that a file is JSON and, optionally, that it decodes
//!   as one of the Wit.ai records
//! - **format**: rewrite a file as pretty or compact JSON
//! - **inspect**: print the value tree with the kind of every node
//!
//! # Examples
//!
//! ```no_run
//! use witjson_cli::commands::{validate, RecordKind};
//!
//! # fn main() -> Result<(), witjson_cli::error::CliError> {
//! validate("response.json", Some(RecordKind::Message))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
