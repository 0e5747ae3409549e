use confusion_loss::{build_contingency, confusion_loss, confusion_loss_from_labels};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

fn sample(num_samples: usize, num_labels: u32, num_clusters: u32) -> (Vec<u32>, Vec<u32>) {
    let mut rng = StdRng::seed_from_u64(42);
    let labels: Vec<u32> = (0..num_samples).map(|_| rng.gen_range(0..num_labels)).collect();
    let predictions = labels
        .iter()
        .map(|&l| if rng.gen_bool(0.8) { l % num_clusters } else { rng.gen_range(0..num_clusters) })
        .collect();
    (labels, predictions)
}

fn bench_from_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("confusion_loss_from_labels");
    for &n in &[1_000usize, 10_000, 100_000] {
        let (labels, predictions) = sample(n, 10, 12);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| confusion_loss_from_labels(black_box(&labels), black_box(&predictions), 2.0))
        });
    }
    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let (labels, predictions) = sample(50_000, 100, 120);
    let table = build_contingency(&labels, &predictions).expect("valid sample");
    c.bench_function("confusion_loss_100x120", |b| {
        b.iter(|| confusion_loss(black_box(table.view()), 2.0))
    });
}

criterion_group!(benches, bench_from_labels, bench_aggregate);
criterion_main!(benches);
