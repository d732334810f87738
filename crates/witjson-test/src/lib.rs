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

//! Shared test fixtures for the WitJSON crates.
//!
//! # Quick Start
//!
//! ```rust
//! use witjson_test::{fixtures, samples};
//! use witjson_core::{Decodable, Encodable};
//!
//! let parent = fixtures::parent();
//! let json = parent.to_json().unwrap();
//! assert_eq!(fixtures::Parent::from_json(&json).unwrap(), parent);
//!
//! for (name, text) in samples::malformed_json() {
//!     assert!(!text.is_empty() || name == "empty");
//! }
//! ```

pub mod fixtures;
pub mod samples;

pub use fixtures::{child_john, child_joey, parent, parent_value, Child, Parent};
