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

//! Bidirectional conversions between a wire scalar and a native type.
//!
//! A [`Transformer`] pairs an encode function with a fallible decode
//! function. Two are built in: [`DATE_TRANSFORMER`] for ISO-8601 timestamps
//! and [`URL_TRANSFORMER`] for absolute URLs. Types bind a default
//! transformer by implementing [`Transformable`].
//!
//! # Examples
//!
//! ```rust
//! use witjson_core::transform::DATE_TRANSFORMER;
//!
//! let date = DATE_TRANSFORMER.decode(&"1981-05-02T08:05:02-07:00".to_string()).unwrap();
//! assert_eq!(date.unix_timestamp(), 357663902);
//! assert_eq!(DATE_TRANSFORMER.encode(&date), "1981-05-02T08:05:02-07:00");
//! ```

use crate::primitive::Primitive;
use crate::value::{Value, ValueKind};
use std::fmt;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};
use url::Url;

/// A named pair of conversions between wire type `W` and native type `N`.
///
/// Decoding returns `None` when the wire value has no native counterpart.
/// For every native `n`, `decode(&encode(&n))` yields a value equal to `n`.
pub struct Transformer<W, N> {
    name: &'static str,
    encode: fn(&N) -> W,
    decode: fn(&W) -> Option<N>,
}

impl<W, N> Transformer<W, N> {
    /// Create a transformer. `name` describes the native target in
    /// diagnostics.
    pub const fn new(name: &'static str, encode: fn(&N) -> W, decode: fn(&W) -> Option<N>) -> Self {
        Self {
            name,
            encode,
            decode,
        }
    }

    /// Name of the native target.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Convert a native value to its wire form.
    pub fn encode(&self, native: &N) -> W {
        (self.encode)(native)
    }

    /// Convert a wire value to its native form.
    pub fn decode(&self, wire: &W) -> Option<N> {
        (self.decode)(wire)
    }
}

impl<W: Primitive, N> Transformer<W, N> {
    /// Kind of dynamic value this transformer reads.
    pub fn wire_kind(&self) -> ValueKind {
        W::KIND
    }

    /// Encode straight into a dynamic value.
    pub fn encode_value(&self, native: &N) -> Value {
        self.encode(native).into_value()
    }

    /// Decode from a dynamic value. Values of the wrong kind yield `None`.
    pub fn decode_value(&self, value: &Value) -> Option<N> {
        W::from_value(value).and_then(|wire| self.decode(&wire))
    }
}

impl<W, N> Clone for Transformer<W, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W, N> Copy for Transformer<W, N> {}

impl<W, N> fmt::Debug for Transformer<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A native type with a default transformer.
pub trait Transformable: Sized + 'static {
    /// Wire scalar the type travels as.
    type Wire: Primitive;

    /// The bound transformer.
    fn transformer() -> &'static Transformer<Self::Wire, Self>;
}

/// ISO-8601 timestamp with second precision and an explicit offset.
///
/// Encoding renders the value in its own offset as
/// `YYYY-MM-DDTHH:MM:SS±HH:MM`, or with a `Z` suffix at offset zero. An
/// offset with a seconds part is rounded to a whole minute and the local
/// time adjusted, so the instant is unchanged. Years before 0 carry a
/// leading `-`. Decoding accepts the `±HH:MM`, `±HHMM` and `Z` offset forms
/// and rejects fractional seconds.
pub static DATE_TRANSFORMER: Transformer<String, OffsetDateTime> =
    Transformer::new("date", encode_date, decode_date);

/// Absolute URL, carried as its serialized string.
pub static URL_TRANSFORMER: Transformer<String, Url> =
    Transformer::new("url", encode_url, decode_url);

impl Transformable for OffsetDateTime {
    type Wire = String;

    fn transformer() -> &'static Transformer<String, Self> {
        &DATE_TRANSFORMER
    }
}

impl Transformable for Url {
    type Wire = String;

    fn transformer() -> &'static Transformer<String, Self> {
        &URL_TRANSFORMER
    }
}

fn encode_date(date: &OffsetDateTime) -> String {
    let date = whole_minute_offset(*date);
    let offset = date.offset();
    let zone = if offset.is_utc() {
        "Z".to_string()
    } else {
        let (hours, minutes, _) = offset.as_hms();
        let sign = if offset.is_negative() { '-' } else { '+' };
        format!(
            "{}{:02}:{:02}",
            sign,
            hours.unsigned_abs(),
            minutes.unsigned_abs()
        )
    };
    let year = date.year();
    let sign = if year < 0 { "-" } else { "" };
    format!(
        "{}{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}",
        sign,
        year.unsigned_abs(),
        u8::from(date.month()),
        date.day(),
        date.hour(),
        date.minute(),
        date.second(),
        zone
    )
}

/// The same instant in an offset the wire form can express.
///
/// Offsets with a seconds part are truncated to the minute, or moved one
/// minute away from zero when truncating leaves the supported date range.
fn whole_minute_offset(date: OffsetDateTime) -> OffsetDateTime {
    let seconds = date.offset().whole_seconds();
    if seconds % 60 == 0 {
        return date;
    }
    let truncated = seconds - seconds % 60;
    [truncated, truncated + 60 * seconds.signum()]
        .into_iter()
        .filter_map(|whole| UtcOffset::from_whole_seconds(whole).ok())
        .find_map(|offset| date.checked_to_offset(offset))
        .unwrap_or(date)
}

#[allow(clippy::ptr_arg)]
fn decode_date(raw: &String) -> Option<OffsetDateTime> {
    let (body, offset) = split_offset(raw)?;
    let local = PrimitiveDateTime::parse(
        body,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .ok()?;
    Some(local.assume_offset(offset))
}

/// Split a timestamp into its local part and trailing offset.
fn split_offset(raw: &str) -> Option<(&str, UtcOffset)> {
    if let Some(body) = raw.strip_suffix('Z') {
        return Some((body, UtcOffset::UTC));
    }
    // "+07:00" then "+0700"
    for width in [6, 5] {
        if raw.len() <= width || !raw.is_char_boundary(raw.len() - width) {
            continue;
        }
        let (body, zone) = raw.split_at(raw.len() - width);
        if let Some(offset) = parse_offset(zone) {
            return Some((body, offset));
        }
    }
    None
}

fn parse_offset(zone: &str) -> Option<UtcOffset> {
    let sign: i8 = match zone.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = &zone[1..];
    let (hours, minutes) = match digits.len() {
        5 if digits.as_bytes()[2] == b':' => (&digits[..2], &digits[3..]),
        4 => (&digits[..2], &digits[2..]),
        _ => return None,
    };
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i8 = hours.parse().ok()?;
    let minutes: i8 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    UtcOffset::from_hms(sign * hours, sign * minutes, 0).ok()
}

fn encode_url(url: &Url) -> String {
    url.as_str().to_string()
}

#[allow(clippy::ptr_arg)]
fn decode_url(raw: &String) -> Option<Url> {
    Url::parse(raw).ok()
}
