use p256_precomputed::field::FieldElement;
use p256_precomputed::table::{TableParams, build_p256, decode, encode};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_build(c: &mut Criterion) {
    c.bench_function("build P-256 table 43x32", |b| {
        b.iter(|| build_p256().unwrap())
    });
}

pub fn bench_encode(c: &mut Criterion) {
    let table = build_p256().unwrap();

    c.bench_function("encode P-256 table", |b| b.iter(|| encode(black_box(&table))));
}

pub fn bench_decode(c: &mut Criterion) {
    let bytes = encode(&build_p256().unwrap());
    let params = TableParams::default();

    c.bench_function("decode P-256 table", |b| {
        b.iter(|| decode(black_box(&bytes), &params).unwrap())
    });
}

pub fn bench_invert(c: &mut Criterion) {
    let a = FieldElement::from(0x1234_5678_9abc_def0u64);

    c.bench_function("field invert", |b| b.iter(|| black_box(a).invert()));
}

criterion_group!(benches, bench_build, bench_encode, bench_decode, bench_invert);
criterion_main!(benches);
