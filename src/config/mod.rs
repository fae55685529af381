// ABOUTME: Report configuration loaded from environment variables
// ABOUTME: Selects the metric, initial date range and calendar time zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

//! Configuration module for SmoothWalker reports
//!
//! Configuration is environment-only. Unset variables fall back to defaults;
//! set but unparseable variables are errors.
//!
//! | Variable | Default |
//! |---|---|
//! | `SMOOTHWALKER_METRIC` | `walking_speed` |
//! | `SMOOTHWALKER_DEFAULT_RANGE` | `week` |
//! | `SMOOTHWALKER_UTC_OFFSET_MINUTES` | `0` |

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use smoothwalker_core::constants::env_keys;
use smoothwalker_core::{DateRange, HealthMetric, ReportCalendar};
use std::env;
use std::str::FromStr;
use tracing::info;

use crate::errors::ConfigError;

/// Longest accepted UTC offset, exclusive
const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60;

/// Settings of one report screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Metric to report
    pub metric: HealthMetric,
    /// Range selected when the report opens
    pub default_range: DateRange,
    /// Offset of the report calendar from UTC, in minutes (east positive)
    pub utc_offset_minutes: i32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            metric: HealthMetric::WalkingSpeed,
            default_range: DateRange::default(),
            utc_offset_minutes: 0,
        }
    }
}

impl ReportConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a variable is set to a value
    /// that cannot be parsed, or to a UTC offset of a day or more.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let metric = parse_env(env_keys::METRIC)?.unwrap_or(defaults.metric);
        let default_range = parse_env(env_keys::DEFAULT_RANGE)?.unwrap_or(defaults.default_range);
        let utc_offset_minutes: i32 =
            parse_env(env_keys::UTC_OFFSET_MINUTES)?.unwrap_or(defaults.utc_offset_minutes);

        if utc_offset_minutes.abs() >= MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::InvalidValue {
                key: env_keys::UTC_OFFSET_MINUTES,
                value: utc_offset_minutes.to_string(),
                reason: format!("offset must be within ±{MAX_UTC_OFFSET_MINUTES} minutes"),
            });
        }

        let config = Self {
            metric,
            default_range,
            utc_offset_minutes,
        };
        info!(
            metric = %config.metric,
            range = %config.default_range,
            utc_offset_minutes = config.utc_offset_minutes,
            "report configuration loaded"
        );
        Ok(config)
    }

    /// Fixed-offset time zone of the report calendar
    #[must_use]
    pub fn time_zone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    /// Calendar reports should bucket in
    #[must_use]
    pub fn calendar(&self) -> ReportCalendar<FixedOffset> {
        ReportCalendar::new(self.time_zone())
    }
}

/// Parse an environment variable, `None` when unset or blank
fn parse_env<T>(key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    let Ok(raw) = env::var(key) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        })
}
