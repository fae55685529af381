// ABOUTME: Fetches bucketed statistics for a report window and reduces them to ordered series
// ABOUTME: One provider query per call, empty buckets reported as zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

use chrono::{DateTime, TimeZone, Utc};
use smoothwalker_core::{
    DateRange, HealthDataTypeValue, HealthMetric, OrderedSeries, ProviderError, ReportCalendar,
};
use smoothwalker_providers::{SamplePredicate, StatisticsProvider, StatisticsQuery};
use std::sync::Arc;
use tracing::{debug, info};

use super::window::{compute_window, DateWindow};
use crate::errors::{AggregationError, AggregationResult};

/// Turns a date range into day buckets of one metric
pub struct RangeAggregator<Tz: TimeZone> {
    provider: Arc<dyn StatisticsProvider>,
    calendar: ReportCalendar<Tz>,
}

impl<Tz: TimeZone> RangeAggregator<Tz> {
    /// Aggregator reading from `provider`, bucketing in `calendar`'s time zone
    #[must_use]
    pub fn new(provider: Arc<dyn StatisticsProvider>, calendar: ReportCalendar<Tz>) -> Self {
        Self { provider, calendar }
    }

    /// Calendar used for windows and buckets
    #[must_use]
    pub const fn calendar(&self) -> &ReportCalendar<Tz> {
        &self.calendar
    }

    /// Provider queried by this aggregator
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn StatisticsProvider> {
        &self.provider
    }

    /// Window for `range` ending at `reference_end`
    ///
    /// # Errors
    ///
    /// Returns `AggregationError::InvalidWindow` on calendar overflow.
    pub fn compute_window(
        &self,
        range: DateRange,
        reference_end: DateTime<Utc>,
    ) -> AggregationResult<DateWindow> {
        compute_window(range, reference_end, &self.calendar)
    }

    /// Samples of `metric` inside `window`, local device only, no manual entries
    #[must_use]
    pub const fn build_predicate(metric: HealthMetric, window: &DateWindow) -> SamplePredicate {
        SamplePredicate::for_report(metric, window.as_interval())
    }

    /// Query the provider once and reduce every bucket of the window.
    ///
    /// Buckets without a statistic keep `0.0`. The table series comes back
    /// most recent first, the chart series oldest first.
    ///
    /// # Errors
    ///
    /// - `AuthorizationDenied` when the provider reports missing read access
    /// - `Provider` for any other provider failure
    /// - `Unit` when a statistic cannot be converted to the preferred unit
    /// - `InvalidWindow` on calendar overflow
    pub async fn fetch_and_aggregate(
        &self,
        metric: HealthMetric,
        range: DateRange,
        reference_end: DateTime<Utc>,
    ) -> AggregationResult<OrderedSeries> {
        let window = self.compute_window(range, reference_end)?;
        let options = metric.statistics_option();
        let unit = self.provider.preferred_unit(metric);
        let query = StatisticsQuery {
            predicate: Self::build_predicate(metric, &window),
            anchor: window.start,
            interval: window.interval,
            options,
        };

        debug!(
            provider = self.provider.name(),
            %metric,
            %range,
            start = %window.start,
            end = %window.end,
            ?options,
            "dispatching statistics query"
        );

        let collection = self
            .provider
            .fetch_statistics(&query)
            .await
            .map_err(|e| match e {
                ProviderError::AuthorizationDenied { .. } => {
                    AggregationError::AuthorizationDenied { metric }
                }
                other => AggregationError::Provider(other),
            })?;

        let buckets = window.buckets(&self.calendar);
        let mut chronological = Vec::with_capacity(buckets.len());

        for statistics in collection.enumerate_statistics(&buckets) {
            let mut value =
                HealthDataTypeValue::empty(statistics.interval.start, statistics.interval.end);
            if let Some(quantity) = statistics.quantity(options) {
                value.value = quantity.double_value(unit)?;
            }
            chronological.push(value);
        }

        let series = OrderedSeries::from_chronological(chronological);
        info!(
            %metric,
            %range,
            buckets = series.len(),
            with_data = collection.len(),
            "aggregated report window"
        );
        Ok(series)
    }
}
