// ABOUTME: Core types for SmoothWalker mobility reports
// ABOUTME: Foundation crate with date ranges, metrics, units, calendar math, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

#![deny(unsafe_code)]

//! # SmoothWalker Core
//!
//! Foundation crate shared by the provider layer and the report engine.
//!
//! ## Modules
//!
//! - **calendar**: Time-zone aware calendar arithmetic (start of day, day and month offsets, day buckets)
//! - **models**: `DateRange`, `HealthMetric` and its configuration table, units, quantities, report values
//! - **errors**: Provider and unit conversion errors
//! - **constants**: Shared labels, identifiers and environment variable names

/// Time-zone aware calendar arithmetic
pub mod calendar;

/// Shared labels, identifiers and environment variable names
pub mod constants;

/// Provider and unit conversion errors
pub mod errors;

/// Report data models
pub mod models;

pub use calendar::{DateInterval, ReportCalendar};
pub use errors::provider::{ProviderError, ProviderResult};
pub use errors::unit::UnitError;
pub use models::{
    AggregationStyle, DateRange, HealthDataTypeValue, HealthMetric, HealthUnit, MetricDescriptor,
    OrderedSeries, Quantity, StatisticsOption, UnitDimension,
};
