use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use descriptive_stats::{describe, Dataset, VarianceMode};
use rand::prelude::*;
use rand_distr::Normal;

/// Generate normal data
fn generate_normal_data(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");
    let sizes = [10, 100, 1_000, 10_000];

    for &size in &sizes {
        let data = Dataset::from_values(generate_normal_data(size, 100.0, 15.0, 42));

        group.bench_with_input(BenchmarkId::new("sample", size), &data, |b, data| {
            b.iter(|| describe(black_box(data), VarianceMode::Sample))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let sizes = [10, 100, 1_000, 10_000];

    for &size in &sizes {
        let text = generate_normal_data(size, 100.0, 15.0, 7)
            .iter()
            .map(|x| format!("{x:.4}"))
            .collect::<Vec<_>>()
            .join(", ");

        group.bench_with_input(BenchmarkId::new("comma_separated", size), &text, |b, text| {
            b.iter(|| Dataset::parse(black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_describe, bench_parse);
criterion_main!(benches);
