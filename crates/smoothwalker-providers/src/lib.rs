// ABOUTME: Health statistics providers for SmoothWalker mobility reports
// ABOUTME: Provider capability trait, query and statistics types, and the synthetic health store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

//! Health statistics providers and core abstractions.
//!
//! The report engine never talks to a platform health store directly. It is
//! handed a `StatisticsProvider` and sends it one `StatisticsQuery` per load.

// Re-export core modules so provider code can keep `use crate::models::*` etc.
pub use smoothwalker_core::calendar;
pub use smoothwalker_core::constants;
pub use smoothwalker_core::errors;
pub use smoothwalker_core::models;

/// Provider capability trait and statistics query types
pub mod core;
/// Raw quantity samples and sample filtering
pub mod sample;
/// Per-bucket statistics and statistics collections
pub mod statistics;
/// In-memory health store for development and testing
pub mod synthetic;

pub use self::core::{BucketInterval, StatisticsProvider, StatisticsQuery};
pub use sample::{QuantitySample, SamplePredicate, SampleSource, SourceFilter};
pub use smoothwalker_core::errors::provider::{ProviderError, ProviderResult};
pub use statistics::{Statistics, StatisticsCollection};
pub use synthetic::SyntheticHealthStore;
