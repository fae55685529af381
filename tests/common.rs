// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference dates, sample builders and a counting report view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `smoothwalker`

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use smoothwalker::report::ReportView;
use smoothwalker::{
    HealthMetric, HealthUnit, ProviderError, Quantity, QuantitySample, ReportCalendar,
    StatisticsProvider, StatisticsQuery, SyntheticHealthStore,
};
use smoothwalker_providers::StatisticsCollection;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Wednesday, June 10 2020, 14:30 UTC
pub fn reference_wednesday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 6, 10, 14, 30, 0).unwrap()
}

/// Midnight UTC of June `day` 2020
pub fn june(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 6, day, 0, 0, 0).unwrap()
}

/// Walking speed sample in mph recorded on the local device
pub fn walking_speed_mph(mph: f64, at: DateTime<Utc>) -> QuantitySample {
    QuantitySample::new(
        HealthMetric::WalkingSpeed,
        Quantity::new(mph, HealthUnit::MilesPerHour),
        at,
    )
}

/// Step count sample recorded on the local device
pub fn steps(count: f64, at: DateTime<Utc>) -> QuantitySample {
    QuantitySample::new(
        HealthMetric::StepCount,
        Quantity::new(count, HealthUnit::Count),
        at,
    )
}

/// Week ending on the reference Wednesday: 3.2 mph on five days,
/// nothing on Saturday June 6 and Tuesday June 9
pub fn five_of_seven_days_store() -> Arc<SyntheticHealthStore<Utc>> {
    init_test_logging();
    let samples = [4, 5, 7, 8, 10]
        .into_iter()
        .flat_map(|day| {
            [
                walking_speed_mph(3.0, june(day) + Duration::hours(8)),
                walking_speed_mph(3.4, june(day) + Duration::hours(12)),
            ]
        })
        .collect();
    Arc::new(SyntheticHealthStore::with_samples(
        ReportCalendar::default(),
        samples,
    ))
}

/// Assert two floats agree to within conversion round-off
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Report view that counts refreshes
#[derive(Debug, Default)]
pub struct CountingView {
    refreshes: AtomicUsize,
}

impl CountingView {
    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl ReportView for CountingView {
    fn refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Provider returning a fixed collection for every query
pub struct FixedProvider {
    pub collection: StatisticsCollection,
}

#[async_trait]
impl StatisticsProvider for FixedProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn request_authorization(&self, _metrics: &[HealthMetric]) -> Result<bool, ProviderError> {
        Ok(true)
    }

    async fn fetch_statistics(
        &self,
        _query: &StatisticsQuery,
    ) -> Result<StatisticsCollection, ProviderError> {
        Ok(self.collection.clone())
    }
}

/// Wraps a store and delays queries whose window is longer than two days
pub struct SlowWeekProvider {
    pub inner: Arc<SyntheticHealthStore<Utc>>,
    pub delay: std::time::Duration,
}

#[async_trait]
impl StatisticsProvider for SlowWeekProvider {
    fn name(&self) -> &'static str {
        "slow-week"
    }

    async fn request_authorization(&self, metrics: &[HealthMetric]) -> Result<bool, ProviderError> {
        self.inner.request_authorization(metrics).await
    }

    async fn fetch_statistics(
        &self,
        query: &StatisticsQuery,
    ) -> Result<StatisticsCollection, ProviderError> {
        if query.predicate.interval.duration() > Duration::days(2) {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.fetch_statistics(query).await
    }
}
