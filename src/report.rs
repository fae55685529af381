// ABOUTME: Report view model holding the selected date range and the latest aggregated series
// ABOUTME: Loads authorize, aggregate, store results or error, then refresh the attached view once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

//! # Report View Model
//!
//! The presentation-facing surface of a report screen. A view attaches itself
//! with [`ReportViewModel::attach_view`]; the model only keeps a weak handle,
//! so a view that goes away simply stops receiving refreshes.
//!
//! Every load ends in exactly one refresh, whether it succeeded, was denied
//! access, or failed. Failures leave both series empty and are reported through
//! [`ReportViewModel::last_error`].
//!
//! Loads are not de-duplicated or cancelled. When two loads overlap, the one
//! that completes last determines the stored series.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use smoothwalker_core::{
    DateRange, HealthDataTypeValue, HealthMetric, OrderedSeries, ReportCalendar,
};
use smoothwalker_providers::StatisticsProvider;
use std::fmt::Display;
use std::sync::{Arc, PoisonError, RwLock, Weak};
use tracing::{debug, warn};

use crate::aggregation::RangeAggregator;
use crate::chart;
use crate::config::ReportConfig;
use crate::errors::{AggregationError, AggregationResult};

/// Receiver of report refresh notifications
pub trait ReportView: Send + Sync {
    /// Redraw from the view model's current series
    fn refresh(&self);
}

#[derive(Debug, Default)]
struct ReportState {
    selected_date_range: DateRange,
    series: OrderedSeries,
    last_error: Option<AggregationError>,
}

/// View model of one metric's report screen
pub struct ReportViewModel<Tz: TimeZone> {
    metric: HealthMetric,
    aggregator: RangeAggregator<Tz>,
    state: RwLock<ReportState>,
    view: RwLock<Option<Weak<dyn ReportView>>>,
}

impl<Tz: TimeZone> ReportViewModel<Tz> {
    /// Report of `metric` read from `provider`, starting on the week range
    #[must_use]
    pub fn new(
        provider: Arc<dyn StatisticsProvider>,
        metric: HealthMetric,
        calendar: ReportCalendar<Tz>,
    ) -> Self {
        Self {
            metric,
            aggregator: RangeAggregator::new(provider, calendar),
            state: RwLock::new(ReportState::default()),
            view: RwLock::new(None),
        }
    }

    /// Start on `range` instead of the default
    #[must_use]
    pub fn with_date_range(self, range: DateRange) -> Self {
        self.write_state().selected_date_range = range;
        self
    }

    /// Attach the view to refresh after each load
    pub fn attach_view(&self, view: &Arc<dyn ReportView>) {
        *self.view.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::downgrade(view));
    }

    /// Metric shown by this report
    #[must_use]
    pub const fn metric(&self) -> HealthMetric {
        self.metric
    }

    /// Navigation title
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.metric.descriptor().report_title
    }

    /// Header shown above the chart
    #[must_use]
    pub fn chart_title(&self) -> &'static str {
        chart::chart_title(self.metric)
    }

    /// Range currently selected
    #[must_use]
    pub fn selected_date_range(&self) -> DateRange {
        self.read_state().selected_date_range
    }

    /// Table rows, most recent first
    #[must_use]
    pub fn data_values(&self) -> Vec<HealthDataTypeValue> {
        self.read_state().series.data_values.clone()
    }

    /// Chart bars, oldest first
    #[must_use]
    pub fn chart_values(&self) -> Vec<f64> {
        self.read_state().series.chart_values.clone()
    }

    /// Both series of the latest load
    #[must_use]
    pub fn series(&self) -> OrderedSeries {
        self.read_state().series.clone()
    }

    /// Error of the latest load, `None` after a successful one
    #[must_use]
    pub fn last_error(&self) -> Option<AggregationError> {
        self.read_state().last_error.clone()
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, ReportState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, ReportState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn refresh_view(&self) {
        let view = self
            .view
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade);
        match view {
            Some(view) => view.refresh(),
            None => debug!(metric = %self.metric, "no view attached, skipping refresh"),
        }
    }

    /// Select `range` and reload ending now
    pub async fn set_date_range_and_reload(&self, range: DateRange) {
        self.set_date_range_and_reload_at(range, Utc::now()).await;
    }

    /// Select `range` and reload ending at `reference_end`
    pub async fn set_date_range_and_reload_at(&self, range: DateRange, reference_end: DateTime<Utc>) {
        self.write_state().selected_date_range = range;
        self.load_data_at(reference_end).await;
    }

    /// Reload the selected range ending now
    pub async fn load_data(&self) {
        self.load_data_at(Utc::now()).await;
    }

    /// Reload the selected range ending at `reference_end`.
    ///
    /// Asks for read access, aggregates, stores the series (or the error with
    /// empty series) and refreshes the view exactly once.
    pub async fn load_data_at(&self, reference_end: DateTime<Utc>) {
        let range = self.selected_date_range();
        let outcome = self.authorize_and_aggregate(range, reference_end).await;

        {
            let mut state = self.write_state();
            match outcome {
                Ok(series) => {
                    state.series = series;
                    state.last_error = None;
                }
                Err(error) => {
                    warn!(metric = %self.metric, %range, error = %error, "report load failed");
                    state.series = OrderedSeries::empty();
                    state.last_error = Some(error);
                }
            }
        }

        self.refresh_view();
    }

    async fn authorize_and_aggregate(
        &self,
        range: DateRange,
        reference_end: DateTime<Utc>,
    ) -> AggregationResult<OrderedSeries> {
        let granted = self
            .aggregator
            .provider()
            .request_authorization(&[self.metric])
            .await?;
        if !granted {
            return Err(AggregationError::AuthorizationDenied {
                metric: self.metric,
            });
        }
        self.aggregator
            .fetch_and_aggregate(self.metric, range, reference_end)
            .await
    }
}

impl ReportViewModel<FixedOffset> {
    /// Report configured by `config`
    #[must_use]
    pub fn from_config(provider: Arc<dyn StatisticsProvider>, config: &ReportConfig) -> Self {
        Self::new(provider, config.metric, config.calendar()).with_date_range(config.default_range)
    }
}

impl<Tz> ReportViewModel<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    /// Axis markers for the selected range ending at `last_date`
    ///
    /// # Errors
    ///
    /// Returns `AggregationError::InvalidWindow` when the window cannot be computed.
    pub fn horizontal_axis_markers(&self, last_date: DateTime<Utc>) -> AggregationResult<Vec<String>> {
        chart::horizontal_axis_markers(
            self.selected_date_range(),
            last_date,
            self.aggregator.calendar(),
        )
    }

    /// Chart header for the selected range ending at `last_date`
    ///
    /// # Errors
    ///
    /// Returns `AggregationError::InvalidWindow` when the window cannot be computed.
    pub fn chart_date_range_label(&self, last_date: DateTime<Utc>) -> AggregationResult<String> {
        chart::chart_date_range_label(
            self.selected_date_range(),
            last_date,
            self.aggregator.calendar(),
        )
    }

    /// Chart footer for a load finished at `date`
    #[must_use]
    pub fn chart_last_updated_label(&self, date: DateTime<Utc>) -> String {
        chart::chart_last_updated_label(date, self.aggregator.calendar())
    }
}
