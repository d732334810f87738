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

//! Core value model and marshaling contracts for WitJSON.
//!
//! This crate holds everything that does not touch JSON text:
//!
//! - [`Value`], the dynamic tree that native values are encoded into and
//!   decoded from
//! - [`Encodable`] and the [`encodable!`] macro for the structural encoding
//! - [`Decodable`] and [`JsonDecoder`] for strict, keyed decoding
//! - [`transform`], the date and URL transformers
//! - [`EncodingError`] and [`DecodingError`]
//!
//! Text parsing and serialization live in `witjson-json`.

mod decode;
mod decoder;
mod encode;
mod error;
mod error_ext;
mod macros;
mod primitive;
pub mod transform;
mod value;

pub use decode::{decode_array, Decodable};
pub use decoder::JsonDecoder;
pub use encode::{encode_fields, encode_transformed, Encodable, Field, Reflected};
pub use error::{
    DecodeResult, DecodingError, DecodingErrorKind, EncodeResult, EncodingError, Location,
    DECODING_ERROR_DOMAIN, ENCODING_ERROR_DOMAIN,
};
pub use error_ext::DecodeResultExt;
pub use primitive::Primitive;
pub use transform::{Transformable, Transformer, DATE_TRANSFORMER, URL_TRANSFORMER};
pub use value::{Map, Value, ValueKind};

// Re-exported so downstream crates name the same date and URL types.
pub use time;
pub use url;
