//! Benchmarks for wave shape generation and compositing.
//!
//! Run with: cargo bench -p tidewave-wave

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tidewave_core::Size;
use tidewave_wave::{generate, Compositor, WaveformComposition};

fn bench_generate(c: &mut Criterion) {
    let phone = Size::new(375.0, 120.0);
    let tablet = Size::new(1024.0, 120.0);

    c.bench_function("generate_375px", |bencher| {
        bencher.iter(|| generate(black_box(phone), black_box(1.3), black_box(30.0), black_box(0.1)));
    });

    c.bench_function("generate_1024px", |bencher| {
        bencher.iter(|| generate(black_box(tablet), black_box(1.3), black_box(30.0), black_box(0.1)));
    });

    c.bench_function("generate_to_polygon_375px", |bencher| {
        bencher.iter(|| generate(black_box(phone), black_box(0.4), black_box(8.0), black_box(0.22)).to_polygon());
    });
}

fn bench_composite(c: &mut Criterion) {
    let comp = WaveformComposition::reflection();
    let compositor = Compositor::default();
    let phases = [0.3, 1.1, 2.7, 4.0];
    let amplitudes = [30.0, 22.0, 15.0, 8.0];

    c.bench_function("composite_reflection_375px", |bencher| {
        bencher.iter(|| {
            compositor.render(
                black_box(&comp),
                black_box(&phases),
                black_box(&amplitudes),
                black_box(375.0),
            )
        });
    });
}

criterion_group!(benches, bench_generate, bench_composite);
criterion_main!(benches);
