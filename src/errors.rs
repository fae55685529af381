// ABOUTME: Error types for report aggregation and configuration loading
// ABOUTME: Provider and unit errors convert into AggregationError via From
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

use chrono::{DateTime, Utc};
use smoothwalker_core::{DateRange, HealthMetric, ProviderError, UnitError};
use thiserror::Error;

/// Failure of one fetch-and-aggregate run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// Read access to the metric was declined
    #[error("read access to {metric} was not granted")]
    AuthorizationDenied {
        /// Metric that was requested
        metric: HealthMetric,
    },

    /// The statistics provider failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A bucket statistic could not be expressed in the preferred unit
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// Calendar arithmetic for the window went out of range
    #[error("cannot compute a {range} window ending at {reference}")]
    InvalidWindow {
        /// Requested range
        range: DateRange,
        /// Requested window end
        reference: DateTime<Utc>,
    },
}

impl AggregationError {
    /// Whether the user declined access, as opposed to a failure
    #[must_use]
    pub const fn is_authorization_denied(&self) -> bool {
        matches!(
            self,
            Self::AuthorizationDenied { .. } | Self::Provider(ProviderError::AuthorizationDenied { .. })
        )
    }
}

/// Result type for aggregation operations
pub type AggregationResult<T> = Result<T, AggregationError>;

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be parsed
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        /// Environment variable name
        key: &'static str,
        /// Raw value found
        value: String,
        /// Parser message
        reason: String,
    },
}
