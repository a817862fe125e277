//! Benchmarks for sampler_core.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use sampler_core::dist::{Exponential, Gaussian, Zipfian};
use sampler_core::rng::Rand48;

fn benchmark_uniform_source(c: &mut Criterion) {
    let mut rng = Rand48::seed_from_u64(42);

    c.bench_function("rand48_next_f64", |b| {
        b.iter(|| black_box(rng.next_f64()))
    });
}

fn benchmark_exponential(c: &mut Criterion) {
    let mut rng = Rand48::seed_from_u64(42);
    let dist = Exponential::new(1, 100_000, 2.5).unwrap();

    c.bench_function("exponential_sample", |b| {
        b.iter(|| black_box(dist.sample(&mut rng)))
    });
}

fn benchmark_gaussian(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian_sample");

    // Spread parameter drives the rejection rate; 2.0 is the worst case.
    for parameter in [2.0, 3.0, 5.0] {
        let mut rng = Rand48::seed_from_u64(42);
        let dist = Gaussian::new(1, 100_000, parameter).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(parameter),
            &dist,
            |b, dist| b.iter(|| black_box(dist.sample(&mut rng))),
        );
    }

    group.finish();
}

fn benchmark_zipfian(c: &mut Criterion) {
    let mut group = c.benchmark_group("zipfian_sample");

    // Acceptance degrades towards the exponent floor.
    for s in [1.1, 1.5, 3.0] {
        let mut rng = Rand48::seed_from_u64(42);
        let dist = Zipfian::new(1, 100_000, s).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(s), &dist, |b, dist| {
            b.iter(|| black_box(dist.sample(&mut rng)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_uniform_source,
    benchmark_exponential,
    benchmark_gaussian,
    benchmark_zipfian
);
criterion_main!(benches);
