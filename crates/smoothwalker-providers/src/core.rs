// ABOUTME: Core statistics provider trait and the query type every provider accepts
// ABOUTME: Defines the seam between the report engine and a platform health store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

//! # Statistics Provider Contract
//!
//! A provider answers one kind of question: "reduce the samples matching this
//! predicate into calendar buckets, starting at this anchor". Report code
//! asks for authorization first, then issues a single `StatisticsQuery` per
//! load and enumerates the returned collection bucket by bucket.
//!
//! Providers compute statistics in the dimension base unit of the metric
//! (m/s, m, count, %). Conversion to a display unit is the caller's job.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::provider::ProviderResult;
use crate::models::{HealthMetric, HealthUnit, StatisticsOption};
use crate::sample::SamplePredicate;
use crate::statistics::StatisticsCollection;

/// Bucket length of a statistics query, in calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BucketInterval {
    /// Number of local calendar days per bucket
    pub days: u32,
}

impl BucketInterval {
    /// One calendar day
    pub const DAY: Self = Self { days: 1 };
}

impl Default for BucketInterval {
    fn default() -> Self {
        Self::DAY
    }
}

/// Bucketed statistics request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsQuery {
    /// Samples to reduce
    pub predicate: SamplePredicate,
    /// Start of the first bucket
    pub anchor: DateTime<Utc>,
    /// Length of each bucket
    pub interval: BucketInterval,
    /// Reduction applied inside each bucket
    pub options: StatisticsOption,
}

impl StatisticsQuery {
    /// Daily query anchored at the predicate's start
    #[must_use]
    pub const fn daily(predicate: SamplePredicate, options: StatisticsOption) -> Self {
        Self {
            anchor: predicate.interval.start,
            predicate,
            interval: BucketInterval::DAY,
            options,
        }
    }
}

/// Source of bucketed health statistics
///
/// Implementations must be `Send + Sync`: one provider instance is shared by
/// every report that reads from the same store.
#[async_trait]
pub trait StatisticsProvider: Send + Sync {
    /// Provider name (e.g. "synthetic")
    fn name(&self) -> &'static str;

    /// Ask for read access to `metrics`.
    ///
    /// Returns `Ok(false)` when the user declined. Errors are reserved for
    /// failures to ask at all.
    async fn request_authorization(&self, metrics: &[HealthMetric]) -> ProviderResult<bool>;

    /// Run a statistics query
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::AuthorizationDenied` when read access was not
    /// granted, or another `ProviderError` when the store cannot answer.
    async fn fetch_statistics(
        &self,
        query: &StatisticsQuery,
    ) -> ProviderResult<StatisticsCollection>;

    /// Unit the store recommends for displaying `metric`
    fn preferred_unit(&self, metric: HealthMetric) -> HealthUnit {
        metric.preferred_unit()
    }
}
