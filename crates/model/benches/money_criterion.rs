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
use tally_model::{Currency, GaapMoney, RoundingMode, StandardMoney};

fn bench_create(c: &mut Criterion) {
    let eur = Currency::EUR();
    c.bench_function("StandardMoney::create", |b| {
        b.iter(|| StandardMoney::create(black_box("1234567.89"), eur));
    });
    c.bench_function("GaapMoney::create", |b| {
        b.iter(|| GaapMoney::create(black_box("1234567.89"), eur));
    });
}

fn bench_arithmetic(c: &mut Criterion) {
    let eur = Currency::EUR();
    let a = StandardMoney::create("1234567.89", eur).unwrap();
    let b = StandardMoney::create("98765.43", eur).unwrap();

    c.bench_function("StandardMoney::add", |bencher| {
        bencher.iter(|| black_box(&a).add(&b));
    });
    c.bench_function("StandardMoney::multiply", |bencher| {
        bencher.iter(|| black_box(&a).multiply("1.0725", RoundingMode::HalfEven));
    });
    c.bench_function("StandardMoney::allocate", |bencher| {
        bencher.iter(|| black_box(&a).allocate(&[1, 2, 3, 5, 8]));
    });
}

criterion_group!(benches, bench_create, bench_arithmetic);
criterion_main!(benches);
