// ABOUTME: Main library entry point for SmoothWalker mobility reports
// ABOUTME: Aggregates health statistics into day, week and month report series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

#![deny(unsafe_code)]

//! # SmoothWalker Reports
//!
//! Reads mobility samples (walking speed, steps, step length, ...) from a
//! health statistics provider and aggregates them into calendar-day buckets
//! over a day, week or month window.
//!
//! ## Architecture
//!
//! - **`smoothwalker-core`**: date ranges, metrics, units, calendar math, errors
//! - **`smoothwalker-providers`**: the `StatisticsProvider` trait and the synthetic store
//! - **aggregation**: window computation and fetch-and-reduce
//! - **chart**: axis markers and chart labels
//! - **report**: the view model a report screen binds to
//! - **config** / **logging**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use smoothwalker::aggregation::RangeAggregator;
//! use smoothwalker::{DateRange, HealthMetric, ReportCalendar, SyntheticHealthStore};
//!
//! # async fn example() -> Result<(), smoothwalker::errors::AggregationError> {
//! let store = Arc::new(SyntheticHealthStore::default());
//! let aggregator = RangeAggregator::new(store, ReportCalendar::default());
//!
//! let series = aggregator
//!     .fetch_and_aggregate(HealthMetric::WalkingSpeed, DateRange::Week, chrono::Utc::now())
//!     .await?;
//! assert_eq!(series.chart_values.len(), 7);
//! # Ok(())
//! # }
//! ```

/// Window computation and fetch-and-reduce of report series
pub mod aggregation;

/// Axis markers and chart header/footer labels
pub mod chart;

/// Environment configuration
pub mod config;

/// Aggregation and configuration errors
pub mod errors;

/// Tracing subscriber setup
pub mod logging;

/// Report view model
pub mod report;

pub use smoothwalker_core::{
    DateInterval, DateRange, HealthDataTypeValue, HealthMetric, HealthUnit, OrderedSeries,
    ProviderError, Quantity, ReportCalendar, StatisticsOption, UnitError,
};
pub use smoothwalker_providers::{
    QuantitySample, SampleSource, StatisticsProvider, StatisticsQuery, SyntheticHealthStore,
};
