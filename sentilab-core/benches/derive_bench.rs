use chrono::{Local, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sentilab_core::{derive, Classification, Observation, SentimentSeries};

fn synthetic_series(len: usize) -> SentimentSeries {
    let newest = 1_700_000_000i64;
    SentimentSeries::new(
        (0..len)
            .map(|i| {
                let value = ((i * 37 + 11) % 101) as u8;
                let ts = Local
                    .timestamp_opt(newest - 86_400 * i as i64, 0)
                    .single()
                    .unwrap();
                Observation::new(ts, value, Classification::from_value(value))
            })
            .collect(),
    )
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    for len in [30usize, 365, 2_000] {
        let series = synthetic_series(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &series, |b, s| {
            b.iter(|| derive(black_box(s)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
