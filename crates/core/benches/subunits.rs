// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use num_bigint::BigInt;
use tally_core::{
    decimal::{from_subunits, to_subunits},
    math::allocate,
    rounding::{RoundingMode, div_round},
};

fn bench_to_subunits(c: &mut Criterion) {
    c.bench_function("to_subunits", |b| {
        b.iter(|| to_subunits(black_box("123456789.12345678"), 8));
    });
}

fn bench_from_subunits(c: &mut Criterion) {
    let raw = BigInt::from(12_345_678_912_345_678_i64);
    c.bench_function("from_subunits", |b| {
        b.iter(|| from_subunits(black_box(&raw), 8));
    });
}

fn bench_div_round(c: &mut Criterion) {
    let numerator = BigInt::from(739_260_i64);
    let denominator = BigInt::from(10_000_i64);
    c.bench_function("div_round", |b| {
        b.iter(|| div_round(black_box(&numerator), &denominator, RoundingMode::HalfEven));
    });
}

fn bench_allocate(c: &mut Criterion) {
    let total = BigInt::from(100_000_i64);
    let ratios = [1, 2, 3, 5, 8, 13];
    c.bench_function("allocate", |b| {
        b.iter(|| allocate(black_box(&total), &ratios));
    });
}

criterion_group!(
    benches,
    bench_to_subunits,
    bench_from_subunits,
    bench_div_round,
    bench_allocate
);
criterion_main!(benches);
