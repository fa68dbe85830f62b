//! Benchmarks for Finboard formatting and dashboard loading
//!
//! Run with: cargo bench

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use finboard::dashboard::{Dashboard, DashboardSnapshot, StaticFeed};
use finboard::format::{format_date, format_value};
use finboard::models::{Transaction, TransactionType, TransactionsResponse};

fn create_test_response(count: usize) -> TransactionsResponse {
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
    let transactions = (0..count)
        .map(|i| {
            let kind = if i % 3 == 0 {
                TransactionType::Outcome
            } else {
                TransactionType::Income
            };
            Transaction::new(
                format!("tx-{}", i),
                format!("Transaction {}", i),
                (i as f64) * 13.37,
                kind,
                "Bench",
            )
            .created_at(start + Duration::hours(i as i64))
        })
        .collect();
    TransactionsResponse::from_transactions(transactions)
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    group.bench_function("value_small", |b| b.iter(|| format_value(black_box(5000.0))));
    group.bench_function("value_large", |b| {
        b.iter(|| format_value(black_box(-1_234_567_890.125)))
    });

    let date = Utc.with_ymd_and_hms(2020, 5, 20, 0, 0, 0).unwrap();
    group.bench_function("date", |b| b.iter(|| format_date(black_box(date))));

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for size in [100, 1000, 10000] {
        let response = create_test_response(size);
        let body = serde_json::to_string(&response).unwrap();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("from_response_{}", size), |b| {
            b.iter(|| DashboardSnapshot::from_response(black_box(response.clone())))
        });

        group.bench_function(format!("decode_{}", size), |b| {
            b.iter(|| {
                serde_json::from_str::<TransactionsResponse>(black_box(&body)).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_mount(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("dashboard");

    group.bench_function("mount_1000", |b| {
        b.iter_custom(|iters| {
            rt.block_on(async {
                let feed = StaticFeed::new(create_test_response(1000));

                let start = std::time::Instant::now();

                for _ in 0..iters {
                    let dashboard = Dashboard::mount(&feed).await;
                    black_box(dashboard);
                }

                start.elapsed()
            })
        });
    });

    group.finish();
}

criterion_group!(benches, bench_format, bench_snapshot, bench_mount);
criterion_main!(benches);
