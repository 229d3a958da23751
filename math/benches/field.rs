// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fastecc_math::{
    fields::{fermat, generic::Goldilocks, mersenne32, mersenne64, proth32},
    FieldElement,
};
use rand_utils::rand_value;

fn field_ops<E: FieldElement>(c: &mut Criterion, field_name: &str) {
    let mut group = c.benchmark_group(field_name);

    group.bench_function("add", |bench| {
        let x: E = rand_value();
        let y: E = rand_value();
        bench.iter(|| black_box(x) + black_box(y))
    });

    group.bench_function("sub", |bench| {
        let x: E = rand_value();
        let y: E = rand_value();
        bench.iter(|| black_box(x) - black_box(y))
    });

    group.bench_function("mul", |bench| {
        let x: E = rand_value();
        let y: E = rand_value();
        bench.iter(|| black_box(x) * black_box(y))
    });

    group.bench_function("exp", |bench| {
        let x: E = rand_value();
        let y: u64 = rand_value();
        bench.iter(|| E::exp(black_box(x), black_box(y)))
    });

    group.bench_function("inv", |bench| {
        let x: E = rand_value();
        bench.iter(|| E::inv(black_box(x)))
    });

    group.finish();
}

fn proth32_mul_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("proth32_mul");

    let x: u32 = proth32::BaseElement::new(rand_value()).as_int();
    let y: u32 = proth32::BaseElement::new(rand_value()).as_int();
    group.bench_function("wide", |bench| {
        bench.iter(|| proth32::mul_wide(black_box(x), black_box(y)))
    });
    group.bench_function("split", |bench| {
        bench.iter(|| proth32::mul_split(black_box(x), black_box(y)))
    });

    group.finish();
}

fn bench_fields(c: &mut Criterion) {
    field_ops::<proth32::BaseElement>(c, "proth32");
    field_ops::<fermat::BaseElement>(c, "fermat");
    field_ops::<mersenne32::BaseElement>(c, "mersenne32");
    field_ops::<mersenne64::BaseElement>(c, "mersenne64");
    field_ops::<Goldilocks>(c, "goldilocks");
}

criterion_group!(field_group, bench_fields, proth32_mul_variants);
criterion_main!(field_group);
