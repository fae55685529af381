// ABOUTME: Raw quantity samples and the predicate that selects them for a report window
// ABOUTME: Restricts samples to the local device and excludes user-entered values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::DateInterval;
use crate::models::{HealthMetric, Quantity};

/// Where a sample was recorded
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleSource {
    /// The device running the report
    LocalDevice,
    /// A paired device (e.g. a watch) syncing into the same store
    PairedDevice(String),
    /// Another app writing into the store
    ThirdPartyApp(String),
}

/// Which sample sources a predicate accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFilter {
    /// Every source
    Any,
    /// Only samples recorded on this device, so synced copies are not counted twice
    LocalDeviceOnly,
}

/// One measurement stored in the health data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantitySample {
    /// Metric measured
    pub metric: HealthMetric,
    /// Measured amount
    pub quantity: Quantity,
    /// When the measurement started
    pub start_date: DateTime<Utc>,
    /// When the measurement ended
    pub end_date: DateTime<Utc>,
    /// Recording source
    pub source: SampleSource,
    /// Entered by hand rather than measured
    pub user_entered: bool,
}

impl QuantitySample {
    /// Instantaneous sample recorded on the local device
    #[must_use]
    pub const fn new(metric: HealthMetric, quantity: Quantity, date: DateTime<Utc>) -> Self {
        Self {
            metric,
            quantity,
            start_date: date,
            end_date: date,
            source: SampleSource::LocalDevice,
            user_entered: false,
        }
    }

    /// Set the recording source
    #[must_use]
    pub fn with_source(mut self, source: SampleSource) -> Self {
        self.source = source;
        self
    }

    /// Mark the sample as entered by hand
    #[must_use]
    pub const fn entered_by_user(mut self) -> Self {
        self.user_entered = true;
        self
    }

    /// Set the end of the measurement
    #[must_use]
    pub const fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = end_date;
        self
    }
}

/// Filter selecting the samples a statistics query aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePredicate {
    /// Metric to select
    pub metric: HealthMetric,
    /// Samples must start inside `[start, end)`
    pub interval: DateInterval,
    /// Accepted sources
    pub source: SourceFilter,
    /// Drop samples entered by hand
    pub exclude_user_entered: bool,
}

impl SamplePredicate {
    /// Predicate used by reports: window bounds, local device only, no manual entries
    #[must_use]
    pub const fn for_report(metric: HealthMetric, interval: DateInterval) -> Self {
        Self {
            metric,
            interval,
            source: SourceFilter::LocalDeviceOnly,
            exclude_user_entered: true,
        }
    }

    /// Whether `sample` is selected
    #[must_use]
    pub fn matches(&self, sample: &QuantitySample) -> bool {
        if sample.metric != self.metric || !self.interval.contains(sample.start_date) {
            return false;
        }
        if self.exclude_user_entered && sample.user_entered {
            return false;
        }
        match self.source {
            SourceFilter::Any => true,
            SourceFilter::LocalDeviceOnly => sample.source == SampleSource::LocalDevice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthUnit;
    use chrono::{Duration, TimeZone};

    fn window() -> DateInterval {
        let start = Utc.with_ymd_and_hms(2023, 3, 16, 0, 0, 0).unwrap();
        DateInterval::new(start, start + Duration::days(7))
    }

    fn speed_sample(offset_hours: i64) -> QuantitySample {
        QuantitySample::new(
            HealthMetric::WalkingSpeed,
            Quantity::new(1.4, HealthUnit::MetersPerSecond),
            window().start + Duration::hours(offset_hours),
        )
    }

    #[test]
    fn test_report_predicate_accepts_local_measurements() {
        let predicate = SamplePredicate::for_report(HealthMetric::WalkingSpeed, window());
        assert!(predicate.matches(&speed_sample(0)));
        assert!(predicate.matches(&speed_sample(7 * 24 - 1)));
    }

    #[test]
    fn test_report_predicate_window_is_half_open() {
        let predicate = SamplePredicate::for_report(HealthMetric::WalkingSpeed, window());
        assert!(!predicate.matches(&speed_sample(-1)));
        assert!(!predicate.matches(&speed_sample(7 * 24)));
    }

    #[test]
    fn test_report_predicate_rejects_synced_and_manual_samples() {
        let predicate = SamplePredicate::for_report(HealthMetric::WalkingSpeed, window());
        let synced = speed_sample(3).with_source(SampleSource::PairedDevice("Watch".to_owned()));
        let manual = speed_sample(3).entered_by_user();

        assert!(!predicate.matches(&synced));
        assert!(!predicate.matches(&manual));

        let permissive = SamplePredicate {
            source: SourceFilter::Any,
            exclude_user_entered: false,
            ..predicate
        };
        assert!(permissive.matches(&synced));
        assert!(permissive.matches(&manual));
    }

    #[test]
    fn test_report_predicate_rejects_other_metrics() {
        let predicate = SamplePredicate::for_report(HealthMetric::StepCount, window());
        assert!(!predicate.matches(&speed_sample(3)));
    }
}
