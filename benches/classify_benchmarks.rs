use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gemba_board::threshold::{classify, parse_threshold};
use gemba_board::{recompute_statuses, MetricRecord, Status, Thresholds};

fn threshold_parsing_benchmark(c: &mut Criterion) {
    let test_values = vec![
        (">=95", Status::Green),
        ("95%", Status::Green),
        ("85-94", Status::Yellow),
        (" 85% - 94% ", Status::Yellow),
        ("=90", Status::Yellow),
        ("<85", Status::Red),
        ("<= 2.5", Status::Red),
        ("garbage", Status::Red),
    ];

    c.bench_function("parse_threshold", |b| {
        b.iter(|| {
            for (raw, color) in &test_values {
                black_box(parse_threshold(black_box(raw), *color));
            }
        })
    });
}

fn classify_benchmark(c: &mut Criterion) {
    let thresholds = Thresholds::new(">=95", "85-94", "<85");
    let values = [99.0, 95.0, 92.0, 85.0, 84.9, 10.0, f64::NAN];

    c.bench_function("classify", |b| {
        b.iter(|| {
            for value in &values {
                black_box(classify(black_box(*value), &thresholds));
            }
        })
    });
}

fn recompute_benchmark(c: &mut Criterion) {
    let records: Vec<MetricRecord> = (0..100)
        .map(|i| {
            MetricRecord::new(
                format!("rec-{}", i),
                "QUALITY",
                80.0 + (i % 20) as f64,
                Thresholds::new(">=95", "85-94", "<85"),
            )
        })
        .collect();

    c.bench_function("recompute_statuses_100", |b| {
        b.iter(|| black_box(recompute_statuses(black_box(&records))))
    });
}

criterion_group!(benches, threshold_parsing_benchmark, classify_benchmark, recompute_benchmark);
criterion_main!(benches);
