// ABOUTME: Report data models shared by providers and the report engine
// ABOUTME: Date ranges, metric configuration, units and quantities, and per-bucket values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

mod date_range;
mod metric;
mod series;
mod unit;

pub use date_range::DateRange;
pub use metric::{AggregationStyle, HealthMetric, MetricDescriptor, StatisticsOption};
pub use series::{HealthDataTypeValue, OrderedSeries};
pub use unit::{HealthUnit, Quantity, UnitDimension};
