// ABOUTME: In-memory health store answering bucketed statistics queries from injected samples
// ABOUTME: Used for development, demos and tests without a platform health store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

// RwLock poisoning errors are converted to ProviderError::ConfigurationError
// for proper error propagation through the application

//! # Synthetic Health Store
//!
//! Holds quantity samples in memory and reduces them the way a platform
//! health store would: samples matching the query predicate are grouped into
//! local calendar-day buckets anchored at the query anchor, converted to the
//! dimension base unit, and reduced. Buckets with no samples are omitted from
//! the returned collection.
//!
//! Authorization can be denied and a failure can be injected, so callers can
//! exercise every error path. All state sits behind `RwLock`/atomics and the
//! store can be shared across tasks.

use async_trait::async_trait;
use chrono::TimeZone;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

use crate::calendar::ReportCalendar;
use crate::constants::provider_names;
use crate::core::{StatisticsProvider, StatisticsQuery};
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::models::HealthMetric;
use crate::sample::QuantitySample;
use crate::statistics::{Statistics, StatisticsCollection};

/// In-memory statistics provider
pub struct SyntheticHealthStore<Tz: TimeZone> {
    samples: Arc<RwLock<Vec<QuantitySample>>>,
    grants_authorization: AtomicBool,
    failure: RwLock<Option<ProviderError>>,
    query_count: AtomicUsize,
    last_query: RwLock<Option<StatisticsQuery>>,
    calendar: ReportCalendar<Tz>,
}

impl<Tz: TimeZone> SyntheticHealthStore<Tz> {
    /// Empty store bucketing in `calendar`'s time zone
    #[must_use]
    pub fn new(calendar: ReportCalendar<Tz>) -> Self {
        Self::with_samples(calendar, Vec::new())
    }

    /// Store pre-loaded with `samples`
    #[must_use]
    pub fn with_samples(calendar: ReportCalendar<Tz>, samples: Vec<QuantitySample>) -> Self {
        Self {
            samples: Arc::new(RwLock::new(samples)),
            grants_authorization: AtomicBool::new(true),
            failure: RwLock::new(None),
            query_count: AtomicUsize::new(0),
            last_query: RwLock::new(None),
            calendar,
        }
    }

    fn lock_error(what: &str) -> ProviderError {
        ProviderError::ConfigurationError {
            provider: provider_names::SYNTHETIC.to_owned(),
            details: format!("RwLock poisoned: {what} lock"),
        }
    }

    /// Add one sample
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn add_sample(&self, sample: QuantitySample) -> ProviderResult<()> {
        self.samples
            .write()
            .map_err(|_| Self::lock_error("samples"))?
            .push(sample);
        Ok(())
    }

    /// Replace every stored sample
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn set_samples(&self, samples: Vec<QuantitySample>) -> ProviderResult<()> {
        *self
            .samples
            .write()
            .map_err(|_| Self::lock_error("samples"))? = samples;
        Ok(())
    }

    /// Number of stored samples
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn sample_count(&self) -> ProviderResult<usize> {
        Ok(self
            .samples
            .read()
            .map_err(|_| Self::lock_error("samples"))?
            .len())
    }

    /// Grant or decline read access on future authorization requests
    pub fn set_authorization(&self, granted: bool) {
        self.grants_authorization.store(granted, Ordering::SeqCst);
    }

    /// Make every statistics query fail with `error` until cleared with `None`
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn set_failure(&self, error: Option<ProviderError>) -> ProviderResult<()> {
        *self
            .failure
            .write()
            .map_err(|_| Self::lock_error("failure"))? = error;
        Ok(())
    }

    /// Number of statistics queries answered or attempted
    #[must_use]
    pub fn query_count(&self) -> usize {
        self.query_count.load(Ordering::SeqCst)
    }

    /// Most recent statistics query
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn last_query(&self) -> ProviderResult<Option<StatisticsQuery>> {
        Ok(*self
            .last_query
            .read()
            .map_err(|_| Self::lock_error("last_query"))?)
    }

    fn record_query(&self, query: &StatisticsQuery) -> ProviderResult<()> {
        self.query_count.fetch_add(1, Ordering::SeqCst);
        *self
            .last_query
            .write()
            .map_err(|_| Self::lock_error("last_query"))? = Some(*query);
        Ok(())
    }

    fn reduce(&self, query: &StatisticsQuery) -> ProviderResult<StatisticsCollection> {
        let predicate = &query.predicate;
        let base_unit = predicate.metric.preferred_unit().dimension().base_unit();
        let samples = self
            .samples
            .read()
            .map_err(|_| Self::lock_error("samples"))?;
        let matching: Vec<&QuantitySample> = samples
            .iter()
            .filter(|sample| predicate.matches(sample))
            .collect();

        let buckets =
            self.calendar
                .buckets(query.anchor, predicate.interval.end, query.interval.days);
        let mut statistics = Vec::new();

        for bucket in buckets {
            let values = matching
                .iter()
                .filter(|sample| bucket.contains(sample.start_date))
                .map(|sample| {
                    sample
                        .quantity
                        .double_value(base_unit)
                        .map_err(|e| ProviderError::QueryFailed {
                            provider: provider_names::SYNTHETIC.to_owned(),
                            details: e.to_string(),
                        })
                })
                .collect::<ProviderResult<Vec<f64>>>()?;

            if !values.is_empty() {
                statistics.push(Statistics::from_values(bucket, &values, base_unit));
            }
        }

        debug!(
            metric = %predicate.metric,
            matched = matching.len(),
            buckets = statistics.len(),
            "synthetic statistics query reduced"
        );
        Ok(StatisticsCollection::new(statistics))
    }
}

impl Default for SyntheticHealthStore<chrono::Utc> {
    fn default() -> Self {
        Self::new(ReportCalendar::default())
    }
}

#[async_trait]
impl<Tz> StatisticsProvider for SyntheticHealthStore<Tz>
where
    Tz: TimeZone + Send + Sync + 'static,
    Tz::Offset: Send + Sync,
{
    fn name(&self) -> &'static str {
        provider_names::SYNTHETIC
    }

    async fn request_authorization(&self, metrics: &[HealthMetric]) -> ProviderResult<bool> {
        let granted = self.grants_authorization.load(Ordering::SeqCst);
        debug!(?metrics, granted, "synthetic authorization request");
        Ok(granted)
    }

    async fn fetch_statistics(&self, query: &StatisticsQuery) -> ProviderResult<StatisticsCollection> {
        self.record_query(query)?;

        if !self.grants_authorization.load(Ordering::SeqCst) {
            return Err(ProviderError::AuthorizationDenied {
                provider: provider_names::SYNTHETIC.to_owned(),
            });
        }

        let injected = self
            .failure
            .read()
            .map_err(|_| Self::lock_error("failure"))?
            .clone();
        if let Some(error) = injected {
            warn!(error = %error, "synthetic store returning injected failure");
            return Err(error);
        }

        self.reduce(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DateInterval;
    use crate::models::{HealthUnit, Quantity, StatisticsOption};
    use crate::sample::{SamplePredicate, SampleSource};
    use chrono::{DateTime, Duration, FixedOffset, Utc};

    fn utc(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 3, d, h, 0, 0).unwrap()
    }

    fn speed(mps: f64, at: DateTime<Utc>) -> QuantitySample {
        QuantitySample::new(
            HealthMetric::WalkingSpeed,
            Quantity::new(mps, HealthUnit::MetersPerSecond),
            at,
        )
    }

    fn weekly_query(metric: HealthMetric) -> StatisticsQuery {
        let predicate =
            SamplePredicate::for_report(metric, DateInterval::new(utc(14, 0), utc(20, 12)));
        StatisticsQuery::daily(predicate, metric.statistics_option())
    }

    #[tokio::test]
    async fn test_averages_samples_per_day() {
        let store = SyntheticHealthStore::with_samples(
            ReportCalendar::default(),
            vec![speed(1.0, utc(15, 8)), speed(2.0, utc(15, 18)), speed(1.5, utc(17, 9))],
        );

        let collection = store
            .fetch_statistics(&weekly_query(HealthMetric::WalkingSpeed))
            .await
            .unwrap();

        assert_eq!(collection.len(), 2);
        let day = collection.statistics_for(utc(15, 0)).unwrap();
        let average = day.quantity(StatisticsOption::Average).unwrap();
        assert_eq!(average.unit, HealthUnit::MetersPerSecond);
        assert!((average.value - 1.5).abs() < 1e-9);
        assert!(collection.statistics_for(utc(16, 0)).is_none());
        assert_eq!(store.query_count(), 1);
    }

    #[tokio::test]
    async fn test_sums_cumulative_metric_in_base_unit() {
        let steps = |count: f64, at| {
            QuantitySample::new(HealthMetric::StepCount, Quantity::new(count, HealthUnit::Count), at)
        };
        let store = SyntheticHealthStore::with_samples(
            ReportCalendar::default(),
            vec![
                steps(1_000.0, utc(20, 7)),
                steps(230.0, utc(20, 9)),
                steps(99.0, utc(20, 9)).with_source(SampleSource::PairedDevice("Watch".into())),
            ],
        );

        let collection = store
            .fetch_statistics(&weekly_query(HealthMetric::StepCount))
            .await
            .unwrap();
        let today = collection.statistics_for(utc(20, 10)).unwrap();
        assert_eq!(today.quantity(StatisticsOption::Sum).unwrap().value, 1_230.0);
        assert_eq!(today.sample_count, 2);
    }

    #[tokio::test]
    async fn test_buckets_follow_local_days() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        // 16:00 UTC on the 15th is already the 16th in UTC+9
        let store = SyntheticHealthStore::with_samples(
            ReportCalendar::new(tokyo),
            vec![speed(1.0, utc(15, 16))],
        );
        let predicate = SamplePredicate::for_report(
            HealthMetric::WalkingSpeed,
            DateInterval::new(utc(13, 15), utc(17, 15)),
        );
        let query = StatisticsQuery::daily(predicate, StatisticsOption::Average);

        let collection = store.fetch_statistics(&query).await.unwrap();
        let stats = collection.iter().next().unwrap();
        assert_eq!(stats.interval.start, utc(15, 15));
        assert_eq!(stats.interval.duration(), Duration::days(1));
    }

    #[tokio::test]
    async fn test_denied_authorization() {
        let store = SyntheticHealthStore::default();
        store.set_authorization(false);

        assert!(!store
            .request_authorization(&[HealthMetric::WalkingSpeed])
            .await
            .unwrap());
        let result = store
            .fetch_statistics(&weekly_query(HealthMetric::WalkingSpeed))
            .await;
        assert_eq!(
            result,
            Err(ProviderError::AuthorizationDenied {
                provider: "synthetic".to_owned()
            })
        );
    }

    #[tokio::test]
    async fn test_injected_failure_is_returned_until_cleared() {
        let store = SyntheticHealthStore::default();
        let failure = ProviderError::Unavailable {
            provider: "synthetic".to_owned(),
            details: "store locked".to_owned(),
        };
        store.set_failure(Some(failure.clone())).unwrap();

        let query = weekly_query(HealthMetric::WalkingSpeed);
        assert_eq!(store.fetch_statistics(&query).await, Err(failure));

        store.set_failure(None).unwrap();
        assert!(store.fetch_statistics(&query).await.unwrap().is_empty());
        assert_eq!(store.query_count(), 2);
        assert_eq!(store.last_query().unwrap(), Some(query));
    }

    #[test]
    fn test_sample_management() {
        let store = SyntheticHealthStore::default();
        store.add_sample(speed(1.0, utc(15, 8))).unwrap();
        assert_eq!(store.sample_count().unwrap(), 1);
        store.set_samples(Vec::new()).unwrap();
        assert_eq!(store.sample_count().unwrap(), 0);
    }
}
