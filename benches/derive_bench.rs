//! Performance benchmarks for display-state derivation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sentiviz::{compute_gauge, distribute, normalize, PredictionRaw, SentimentSnapshot};

fn bench_derivations(c: &mut Criterion) {
    let raw = PredictionRaw {
        sentiment: Some("Negative".to_string()),
        confidence: Some(0.82),
    };
    let result = normalize(&raw);

    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&raw)));
    });

    c.bench_function("distribute", |b| {
        b.iter(|| distribute(black_box(&result)));
    });

    c.bench_function("compute_gauge", |b| {
        b.iter(|| compute_gauge(black_box(82.0)));
    });

    c.bench_function("snapshot_derive", |b| {
        b.iter(|| SentimentSnapshot::derive(black_box(result)));
    });
}

criterion_group!(benches, bench_derivations);
criterion_main!(benches);
