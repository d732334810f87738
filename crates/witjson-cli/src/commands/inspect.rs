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

//! Inspect command - value tree visualization

use super::read_file;
use crate::error::CliError;
use colored::Colorize;
use witjson::{parse, Value};

/// Print the value tree of a JSON file.
///
/// Each line shows a node's key or index, its kind and, for scalars, its
/// value. Containers deeper than `depth` are summarized on one line.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
pub fn inspect(file: &str, depth: Option<usize>) -> Result<(), CliError> {
    let content = read_file(file)?;
    let value = parse(&content)?;

    println!("{}", "WitJSON Value".bold().underline());
    println!();
    print!("{}", render_tree(&value, depth));
    Ok(())
}

/// Render `value` as an indented tree, one node per line.
pub fn render_tree(value: &Value, depth: Option<usize>) -> String {
    let mut out = String::new();
    out.push_str(&describe(value));
    out.push('\n');
    render_children(value, "", 1, depth, &mut out);
    out
}

fn render_children(
    value: &Value,
    prefix: &str,
    level: usize,
    depth: Option<usize>,
    out: &mut String,
) {
    if depth.map_or(false, |max| level > max) {
        return;
    }
    let children: Vec<(String, &Value)> = match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (format!("[{}]", i), item))
            .collect(),
        Value::Object(members) => members.iter().map(|(k, v)| (k.clone(), v)).collect(),
        _ => return,
    };

    let count = children.len();
    for (i, (label, child)) in children.into_iter().enumerate() {
        let last = i + 1 == count;
        let branch = if last { "└── " } else { "├── " };
        out.push_str(&format!("{}{}{}: {}\n", prefix, branch, label, describe(child)));
        let nested = format!("{}{}", prefix, if last { "    " } else { "│   " });
        render_children(child, &nested, level + 1, depth, out);
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("{} ({} elements)", value.kind(), items.len()),
        Value::Object(members) => format!("{} ({} members)", value.kind(), members.len()),
        Value::Null => value.kind().to_string(),
        scalar => format!("{} = {}", scalar.kind(), scalar),
    }
}
