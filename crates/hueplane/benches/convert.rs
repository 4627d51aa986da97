use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hueplane::{color_space, LchModel, RgbGamut};

pub fn run_benchmarks(c: &mut Criterion) {
    let space = color_space(LchModel::OkLch);

    let mut group = c.benchmark_group("conversion");

    group.bench_function("from-perceptual", |b| {
        b.iter(|| space.from_perceptual(black_box(0.6), black_box(0.12), black_box(30.0)))
    });

    group.bench_function("parse-hex", |b| {
        b.iter(|| space.parse(black_box("#3178ea")))
    });

    group.bench_function("gamut-mapped-hex", |b| {
        b.iter(|| {
            let color = space.from_perceptual(black_box(0.6), black_box(0.35), black_box(30.0));
            color.hex().len()
        })
    });

    group.bench_function("gamut-boundary", |b| {
        b.iter(|| space.gamut_boundary(black_box(0.6), RgbGamut::DisplayP3, black_box(64)))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
