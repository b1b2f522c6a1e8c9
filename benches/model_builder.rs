//! Benchmarks for the per-frame hot path: model building and serialization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use handtrace::model::{build_hand, LandmarkSample, LANDMARK_COUNT};
use handtrace::recording::serialize_frame;

fn spread_frame() -> Vec<LandmarkSample> {
    (0..LANDMARK_COUNT)
        .map(|i| {
            let t = i as f64;
            LandmarkSample::new(t * 0.01, (t * 0.1).sin(), (t * 0.1).cos(), 0.9)
        })
        .collect()
}

fn bench_build_hand(c: &mut Criterion) {
    let samples = spread_frame();
    c.bench_function("build_hand", |b| {
        b.iter(|| build_hand(black_box(Some(&samples))).unwrap())
    });
}

fn bench_serialize_frame(c: &mut Criterion) {
    let samples = spread_frame();
    let hand = build_hand(Some(&samples)).unwrap().unwrap();
    c.bench_function("serialize_frame", |b| {
        b.iter(|| serialize_frame(black_box(33), Some(&hand), Some(&hand)).unwrap())
    });
}

criterion_group!(benches, bench_build_hand, bench_serialize_frame);
criterion_main!(benches);
