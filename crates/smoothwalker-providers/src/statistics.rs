// ABOUTME: Reduced statistics for one bucket and the collection a provider returns
// ABOUTME: Enumeration visits every requested bucket, including ones with no samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::DateInterval;
use crate::models::{HealthUnit, Quantity, StatisticsOption};

/// Statistics of the samples inside one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Bucket covered
    pub interval: DateInterval,
    /// Number of samples reduced
    pub sample_count: usize,
    /// Mean sample value
    pub average: Option<Quantity>,
    /// Sum of sample values
    pub sum: Option<Quantity>,
    /// Smallest sample value
    pub minimum: Option<Quantity>,
    /// Largest sample value
    pub maximum: Option<Quantity>,
}

impl Statistics {
    /// Bucket without samples
    #[must_use]
    pub const fn empty(interval: DateInterval) -> Self {
        Self {
            interval,
            sample_count: 0,
            average: None,
            sum: None,
            minimum: None,
            maximum: None,
        }
    }

    /// Reduce `values`, all expressed in `unit`
    #[must_use]
    pub fn from_values(interval: DateInterval, values: &[f64], unit: HealthUnit) -> Self {
        if values.is_empty() {
            return Self::empty(interval);
        }
        let sum: f64 = values.iter().sum();
        let average = sum / values.len() as f64;
        let minimum = values.iter().copied().fold(f64::INFINITY, f64::min);
        let maximum = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            interval,
            sample_count: values.len(),
            average: Some(Quantity::new(average, unit)),
            sum: Some(Quantity::new(sum, unit)),
            minimum: Some(Quantity::new(minimum, unit)),
            maximum: Some(Quantity::new(maximum, unit)),
        }
    }

    /// Quantity selected by `option`, absent when the bucket had no samples
    #[must_use]
    pub const fn quantity(&self, option: StatisticsOption) -> Option<Quantity> {
        match option {
            StatisticsOption::Average => self.average,
            StatisticsOption::Sum => self.sum,
            StatisticsOption::Minimum => self.minimum,
            StatisticsOption::Maximum => self.maximum,
        }
    }
}

/// Bucketed statistics returned by a provider, oldest bucket first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsCollection {
    statistics: Vec<Statistics>,
}

impl StatisticsCollection {
    /// Wrap provider statistics; sorted by bucket start
    #[must_use]
    pub fn new(mut statistics: Vec<Statistics>) -> Self {
        statistics.sort_by_key(|stats| stats.interval.start);
        Self { statistics }
    }

    /// Statistics of the bucket containing `instant`
    #[must_use]
    pub fn statistics_for(&self, instant: DateTime<Utc>) -> Option<&Statistics> {
        self.statistics
            .iter()
            .find(|stats| stats.interval.contains(instant))
    }

    /// One entry per bucket in `buckets`, in that order.
    ///
    /// Provider statistics belong to the requested bucket containing their
    /// start and are reported with that bucket's bounds. Buckets the provider returned nothing for come back as empty
    /// statistics.
    #[must_use]
    pub fn enumerate_statistics(&self, buckets: &[DateInterval]) -> Vec<Statistics> {
        buckets
            .iter()
            .map(|bucket| {
                self.statistics
                    .iter()
                    .find(|stats| bucket.contains(stats.interval.start))
                    .map_or_else(
                        || Statistics::empty(*bucket),
                        |stats| Statistics {
                            interval: *bucket,
                            ..stats.clone()
                        },
                    )
            })
            .collect()
    }

    /// Number of buckets with statistics
    #[must_use]
    pub fn len(&self) -> usize {
        self.statistics.len()
    }

    /// Whether no bucket had statistics
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statistics.is_empty()
    }

    /// Statistics oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Statistics> {
        self.statistics.iter()
    }
}
