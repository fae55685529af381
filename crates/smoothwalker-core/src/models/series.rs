// ABOUTME: Per-bucket report values and the table/chart series built from them
// ABOUTME: Table order is most-recent-first, chart order is chronological
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reduced statistic of one calendar-day bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthDataTypeValue {
    /// Bucket start (inclusive)
    pub start_date: DateTime<Utc>,
    /// Bucket end (exclusive)
    pub end_date: DateTime<Utc>,
    /// Statistic in the metric's preferred unit, `0.0` when the bucket had no samples
    pub value: f64,
}

impl HealthDataTypeValue {
    /// Create an empty bucket value
    #[must_use]
    pub const fn empty(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            end_date,
            value: 0.0,
        }
    }
}

/// Result of one aggregation, shaped for a table and a bar chart.
///
/// The two sequences describe the same buckets in **opposite orders**:
///
/// - `data_values` is most-recent-first, the order the table lists rows in.
/// - `chart_values` is chronological, the order chart bars are drawn in.
///
/// `data_values[i].value == chart_values[len - 1 - i]` for every bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderedSeries {
    /// Bucket values, most recent first
    pub data_values: Vec<HealthDataTypeValue>,
    /// Bucket scalars, oldest first
    pub chart_values: Vec<f64>,
}

impl OrderedSeries {
    /// Series with no buckets
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data_values: Vec::new(),
            chart_values: Vec::new(),
        }
    }

    /// Build both sequences from buckets listed oldest first
    #[must_use]
    pub fn from_chronological(buckets: Vec<HealthDataTypeValue>) -> Self {
        let chart_values = buckets.iter().map(|bucket| bucket.value).collect();
        let mut data_values = buckets;
        data_values.reverse();
        Self {
            data_values,
            chart_values,
        }
    }

    /// Number of buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.chart_values.len()
    }

    /// Whether the series holds no buckets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chart_values.is_empty()
    }

    /// Buckets oldest first
    pub fn chronological(&self) -> impl Iterator<Item = &HealthDataTypeValue> {
        self.data_values.iter().rev()
    }
}
