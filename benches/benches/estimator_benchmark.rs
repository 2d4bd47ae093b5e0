//! Estimator benchmarks.
//!
//! Run with: `cargo bench --package adforecast-bench`

use adforecast_bench::{benchmark_cases, budget_sweep};
use adforecast_lib::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = ForecastEstimator::global();
    let mut group = c.benchmark_group("estimate");

    for case in benchmark_cases() {
        group.bench_with_input(BenchmarkId::new("full_report", case.name), &case, |b, case| {
            b.iter(|| estimator.estimate(black_box(case.request)));
        });
    }

    group.finish();
}

fn scaling_benchmark(c: &mut Criterion) {
    let estimator = ForecastEstimator::global();
    let budgets = budget_sweep(256);
    let mut group = c.benchmark_group("scaling");
    group.throughput(Throughput::Elements(budgets.len() as u64));

    group.bench_function("scaled_forecast", |b| {
        b.iter(|| {
            for budget in &budgets {
                black_box(estimator.scaled_forecast(*budget));
            }
        });
    });

    group.bench_function("performance_metrics", |b| {
        let duration = CampaignDays::default();
        b.iter(|| {
            for budget in &budgets {
                let _ = black_box(estimator.generate_performance_metrics(*budget, duration));
            }
        });
    });

    group.finish();
}

fn formatting_benchmark(c: &mut Criterion) {
    let budget = benchmark_cases()[1].request.budget;
    let series = ForecastEstimator::global().scaled_forecast(budget);
    let csv = CsvFormatter::new();
    let json = JsonFormatter::new();

    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Elements(series.len() as u64));

    group.bench_function("csv", |b| {
        b.iter(|| {
            let mut buffer = Vec::new();
            let _ = csv.write_series(black_box(&series), &mut buffer);
            buffer
        });
    });

    group.bench_function("json", |b| {
        b.iter(|| {
            let mut buffer = Vec::new();
            let _ = json.write_series(black_box(&series), &mut buffer);
            buffer
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    estimate_benchmark,
    scaling_benchmark,
    formatting_benchmark
);
criterion_main!(benches);
