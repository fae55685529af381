// ABOUTME: Structured error types for health data provider operations
// ABOUTME: Distinguishes authorization denial from provider outages and query failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

use thiserror::Error;

/// Errors raised by a statistics provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Read access to the requested metrics was not granted
    #[error("{provider}: access to health data was not authorized")]
    AuthorizationDenied {
        /// Provider name
        provider: String,
    },

    /// Provider could not be reached or is not available on this device
    #[error("{provider} is unavailable: {details}")]
    Unavailable {
        /// Provider name
        provider: String,
        /// What went wrong
        details: String,
    },

    /// Provider accepted the request but failed to compute statistics
    #[error("{provider} statistics query failed: {details}")]
    QueryFailed {
        /// Provider name
        provider: String,
        /// What went wrong
        details: String,
    },

    /// Internal provider state is unusable (e.g. poisoned lock)
    #[error("{provider} configuration error: {details}")]
    ConfigurationError {
        /// Provider name
        provider: String,
        /// What went wrong
        details: String,
    },
}

impl ProviderError {
    /// Whether repeating the request could succeed. Informational only; the
    /// report engine never retries on its own.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::QueryFailed { .. })
    }

    /// Name of the provider that produced the error
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::AuthorizationDenied { provider }
            | Self::Unavailable { provider, .. }
            | Self::QueryFailed { provider, .. }
            | Self::ConfigurationError { provider, .. } => provider,
        }
    }
}

/// Result alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
