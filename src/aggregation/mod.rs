// ABOUTME: Date-range aggregation of health statistics into report series
// ABOUTME: Window computation, predicate construction and bucket reduction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

//! # Range Aggregation
//!
//! A report load is one pass through this module:
//!
//! 1. [`compute_window`] maps a `DateRange` and a reference instant to a
//!    half-open window starting at a local midnight.
//! 2. [`RangeAggregator::build_predicate`] selects local-device, non-manual
//!    samples of the metric inside the window.
//! 3. [`RangeAggregator::fetch_and_aggregate`] sends a single daily
//!    statistics query, then walks every bucket of the window in order and
//!    reduces it with the metric's operator, converted to its preferred unit.

/// Fetch-and-reduce against a statistics provider
pub mod aggregator;
/// Window bounds per date range
pub mod window;

pub use aggregator::RangeAggregator;
pub use window::{compute_window, DateWindow};
