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

//! Encode/decode benchmarks over the parent/child fixtures.
//!
//! - wire text → Value
//! - Value → typed record
//! - typed record → wire text
//! - batches of records at several sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use witjson_core::{decode_array, Decodable, Encodable, Value};
use witjson_json::{decode_str, encode_string, parse, to_json, ToJsonConfig};
use witjson_test::samples::PARENT_JSON;
use witjson_test::{parent, Parent};

const SIZES: [usize; 3] = [10, 100, 1_000];

fn batch_text(count: usize) -> String {
    let items: Vec<&str> = std::iter::repeat(PARENT_JSON).take(count).collect();
    format!("[{}]", items.join(","))
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");
    group.throughput(Throughput::Bytes(PARENT_JSON.len() as u64));

    group.bench_function("parse", |b| b.iter(|| parse(black_box(PARENT_JSON))));

    let value = parse(PARENT_JSON).unwrap();
    group.bench_function("decode", |b| {
        b.iter(|| Parent::from_json(black_box(&value)))
    });

    group.bench_function("decode_str", |b| {
        b.iter(|| decode_str::<Parent>(black_box(PARENT_JSON)))
    });

    let record = parent();
    group.bench_function("encode", |b| b.iter(|| black_box(&record).to_json()));
    group.bench_function("encode_string", |b| {
        b.iter(|| encode_string(black_box(&record)))
    });

    group.finish();
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in SIZES {
        let text = batch_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        let value = parse(&text).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", size), &value, |b, value| {
            b.iter(|| decode_array::<Parent>(black_box(value)))
        });

        let records: Vec<Parent> = decode_array(&value).unwrap();
        group.bench_with_input(BenchmarkId::new("encode", size), &records, |b, records| {
            b.iter(|| -> Option<String> {
                let tree: Value = black_box(records).to_json().ok()?;
                to_json(&tree, &ToJsonConfig::default()).ok()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_batches);
criterion_main!(benches);
