use classify_lines::{classify, dialects};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_classify_fixture(c: &mut Criterion) {
    let dialect = dialects::dialect_for("go").expect("go dialect");
    let source: &[u8] = include_bytes!("../tests/data/go.go");

    c.bench_function("classify_go_fixture", |b| {
        b.iter(|| {
            let summary = classify(black_box(source), &dialect);
            black_box(summary);
        })
    });

    let plain = dialects::plain_text();
    c.bench_function("classify_plain_text", |b| {
        b.iter(|| {
            let summary = classify(black_box(source), &plain);
            black_box(summary);
        })
    });
}

criterion_group!(benches, benchmark_classify_fixture);
criterion_main!(benches);
