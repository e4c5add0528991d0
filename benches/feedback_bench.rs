//! # Feedback Dispatch Benchmarks
//!
//! Measures the kind-to-effect resolution and the dispatch path through a
//! recording driver (no real hardware in benchmarks).
//!
//! Run: `cargo bench --bench feedback_bench`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vibra::{HapticFeedback, Kind, RecordingDriver};

/// Benchmark Kind → Effect resolution
fn bench_effect_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("effect_resolution");

    group.bench_function("single", |b| {
        b.iter(|| black_box(Kind::Deny.effect()))
    });

    group.bench_function("all_kinds", |b| {
        b.iter(|| {
            for kind in Kind::ALL {
                black_box(kind.effect());
            }
        })
    });

    group.finish();
}

/// Benchmark dispatch through the recording driver
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("play", |b| {
        let mut feedback = HapticFeedback::with_driver(RecordingDriver::new());
        b.iter(|| feedback.play(black_box(Kind::Success)))
    });

    group.bench_function("vibrate", |b| {
        let mut feedback = HapticFeedback::with_driver(RecordingDriver::new());
        b.iter(|| feedback.vibrate())
    });

    group.finish();
}

criterion_group!(benches, bench_effect_resolution, bench_dispatch);
criterion_main!(benches);
