//! Resampling benchmarks.
//!
//! Run with: `cargo bench --package tapeline-bench`
//! (add `--features parallel` to measure rayon bucket aggregation)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::fs::File;
use std::hint::black_box;
use tapeline_bench::{SeriesConfig, synthetic_ticks};
use tapeline_lib::{BarAggregator, CsvFormatter, Formatter, Timeframe, read_rows, resample};

fn resample_benchmark(c: &mut Criterion) {
    let rows = synthetic_ticks(&SeriesConfig::default());

    let mut group = c.benchmark_group("resample");
    group.throughput(Throughput::Elements(rows.len() as u64));

    for timeframe in Timeframe::all() {
        group.bench_with_input(
            BenchmarkId::from_parameter(timeframe),
            timeframe,
            |b, &timeframe| b.iter(|| resample(black_box(&rows), timeframe)),
        );
    }

    group.finish();
}

fn streaming_benchmark(c: &mut Criterion) {
    let rows = synthetic_ticks(&SeriesConfig::default());

    let mut group = c.benchmark_group("aggregator");
    group.throughput(Throughput::Elements(rows.len() as u64));

    for timeframe in [Timeframe::Minute5, Timeframe::Hour1] {
        group.bench_with_input(
            BenchmarkId::from_parameter(timeframe),
            &timeframe,
            |b, &timeframe| {
                b.iter(|| {
                    let mut aggregator = BarAggregator::new(timeframe);
                    let mut bars = 0usize;
                    for row in &rows {
                        if aggregator.push(black_box(row)).is_some() {
                            bars += 1;
                        }
                    }
                    bars + usize::from(aggregator.finish().is_some())
                });
            },
        );
    }

    group.finish();
}

fn read_benchmark(c: &mut Criterion) {
    let rows = synthetic_ticks(&SeriesConfig::default().with_rows(20_000));
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("ticks.csv");
    let file = File::create(&path).expect("failed to create csv");
    CsvFormatter::new()
        .write_rows(&rows, file)
        .expect("failed to write csv");

    let mut group = c.benchmark_group("read");
    group.sample_size(20);
    group.throughput(Throughput::Elements(rows.len() as u64));
    group.bench_function("csv", |b| {
        b.iter(|| read_rows(black_box(&path)).expect("failed to read csv"));
    });
    group.finish();
}

criterion_group!(benches, resample_benchmark, streaming_benchmark, read_benchmark);
criterion_main!(benches);
