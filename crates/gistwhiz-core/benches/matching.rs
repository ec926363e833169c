use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gistwhiz_core::normalize::normalize;
use gistwhiz_core::quantity::parse_quantity;
use gistwhiz_core::{answers_match, Comparator};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("short", |b| b.iter(|| normalize(black_box("Heart"))));

    group.bench_function("parenthetical", |b| {
        b.iter(|| normalize(black_box("The heart (cardiac muscle), of course!")))
    });

    group.finish();
}

fn bench_parse_quantity(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_quantity");

    group.bench_function("prefixed", |b| {
        b.iter(|| parse_quantity(black_box("5000 mg")))
    });

    group.bench_function("not_a_quantity", |b| {
        b.iter(|| parse_quantity(black_box("left ventricle")))
    });

    group.finish();
}

fn bench_answers_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("answers_match");

    group.bench_function("exact", |b| {
        b.iter(|| answers_match(black_box("Heart"), black_box("heart")))
    });

    group.bench_function("quantity", |b| {
        b.iter(|| answers_match(black_box("5000 mg"), black_box("5 g")))
    });

    let long_a = "the quick brown fox jumps over the lazy dog near the riverbank at dawn";
    let long_b = "quick brown fox jumped over lazy dog near riverbank at dawn";
    group.bench_function("fuzzy_sentence", |b| {
        b.iter(|| answers_match(black_box(long_a), black_box(long_b)))
    });

    let comparator = Comparator::default();
    group.bench_function("explain", |b| {
        b.iter(|| comparator.explain(black_box("five apples"), black_box("5 aples")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_parse_quantity,
    bench_answers_match
);
criterion_main!(benches);
