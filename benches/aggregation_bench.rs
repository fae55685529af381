// ABOUTME: Criterion benchmarks for report aggregation against the synthetic store
// ABOUTME: Measures fetch-and-aggregate latency per date range and sample density
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

//! Criterion benchmarks for date-range aggregation.
//!
//! Measures one full fetch-and-aggregate run (window, query, bucket reduction)
//! for each date range over stores of increasing sample density.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use smoothwalker::aggregation::RangeAggregator;
use smoothwalker::{
    DateRange, HealthMetric, HealthUnit, Quantity, QuantitySample, ReportCalendar,
    SyntheticHealthStore,
};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Samples recorded per day
const SAMPLES_PER_DAY: [usize; 3] = [4, 48, 288];

/// Days of history loaded into the store
const HISTORY_DAYS: i64 = 45;

fn walking_speed_history(per_day: usize) -> Vec<QuantitySample> {
    let end = Utc.with_ymd_and_hms(2020, 6, 10, 23, 0, 0).unwrap();
    let step = Duration::minutes(24 * 60 / per_day as i64);
    (0..HISTORY_DAYS * per_day as i64)
        .map(|index| {
            let speed = 1.2 + (index % 7) as f64 * 0.05;
            QuantitySample::new(
                HealthMetric::WalkingSpeed,
                Quantity::new(speed, HealthUnit::MetersPerSecond),
                end - step * index as i32,
            )
        })
        .collect()
}

fn bench_fetch_and_aggregate(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let reference = Utc.with_ymd_and_hms(2020, 6, 10, 23, 30, 0).unwrap();
    let mut group = c.benchmark_group("fetch_and_aggregate");

    for per_day in SAMPLES_PER_DAY {
        let store = Arc::new(SyntheticHealthStore::with_samples(
            ReportCalendar::default(),
            walking_speed_history(per_day),
        ));
        let aggregator = RangeAggregator::new(store, ReportCalendar::default());

        group.throughput(Throughput::Elements((HISTORY_DAYS as usize * per_day) as u64));
        for range in DateRange::ALL {
            group.bench_with_input(
                BenchmarkId::new(range.title(), per_day),
                &range,
                |b, range| {
                    b.iter(|| {
                        rt.block_on(async {
                            aggregator
                                .fetch_and_aggregate(
                                    HealthMetric::WalkingSpeed,
                                    black_box(*range),
                                    black_box(reference),
                                )
                                .await
                                .unwrap()
                        })
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_fetch_and_aggregate);
criterion_main!(benches);
