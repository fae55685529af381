// ABOUTME: Tests for environment-driven report and logging configuration
// ABOUTME: Env-mutating tests run serially to avoid interfering with each other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{FixedOffset, Offset, TimeZone, Utc};
use serial_test::serial;
use smoothwalker::config::ReportConfig;
use smoothwalker::errors::ConfigError;
use smoothwalker::logging::{LogFormat, LoggingConfig};
use smoothwalker::{DateRange, HealthMetric};
use std::env;

const REPORT_KEYS: [&str; 3] = [
    "SMOOTHWALKER_METRIC",
    "SMOOTHWALKER_DEFAULT_RANGE",
    "SMOOTHWALKER_UTC_OFFSET_MINUTES",
];

fn clear_report_env() {
    for key in REPORT_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_report_env();

    let config = ReportConfig::from_env().unwrap();
    assert_eq!(config, ReportConfig::default());
    assert_eq!(config.metric, HealthMetric::WalkingSpeed);
    assert_eq!(config.default_range, DateRange::Week);
    assert_eq!(config.time_zone(), Utc.fix());
}

#[test]
#[serial]
fn test_values_from_environment() {
    clear_report_env();
    env::set_var("SMOOTHWALKER_METRIC", "Step_Count");
    env::set_var("SMOOTHWALKER_DEFAULT_RANGE", " MONTH ");
    env::set_var("SMOOTHWALKER_UTC_OFFSET_MINUTES", "-300");

    let config = ReportConfig::from_env().unwrap();
    clear_report_env();

    assert_eq!(config.metric, HealthMetric::StepCount);
    assert_eq!(config.default_range, DateRange::Month);
    assert_eq!(config.time_zone(), FixedOffset::west_opt(5 * 3600).unwrap());

    // 03:00 UTC is still the previous day at UTC-5
    let calendar = config.calendar();
    let instant = Utc.with_ymd_and_hms(2020, 6, 10, 3, 0, 0).unwrap();
    assert_eq!(
        calendar.start_of_day(instant).unwrap(),
        Utc.with_ymd_and_hms(2020, 6, 9, 5, 0, 0).unwrap()
    );
}

#[test]
#[serial]
fn test_blank_values_fall_back_to_defaults() {
    clear_report_env();
    env::set_var("SMOOTHWALKER_DEFAULT_RANGE", "   ");

    let config = ReportConfig::from_env().unwrap();
    clear_report_env();

    assert_eq!(config.default_range, DateRange::Week);
}

#[test]
#[serial]
fn test_unknown_metric_is_rejected() {
    clear_report_env();
    env::set_var("SMOOTHWALKER_METRIC", "heart_rate");

    let result = ReportConfig::from_env();
    clear_report_env();

    match result {
        Err(ConfigError::InvalidValue { key, value, .. }) => {
            assert_eq!(key, "SMOOTHWALKER_METRIC");
            assert_eq!(value, "heart_rate");
        }
        other => panic!("expected invalid metric, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_bad_offsets_are_rejected() {
    for raw in ["abc", "1440", "-2000"] {
        clear_report_env();
        env::set_var("SMOOTHWALKER_UTC_OFFSET_MINUTES", raw);

        let result = ReportConfig::from_env();
        clear_report_env();

        assert!(
            matches!(
                result,
                Err(ConfigError::InvalidValue {
                    key: "SMOOTHWALKER_UTC_OFFSET_MINUTES",
                    ..
                })
            ),
            "offset {raw} should be rejected"
        );
    }
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("COMPACT"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("xml"), LogFormat::Pretty); // Default fallback
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("SERVICE_NAME", "smoothwalker-test");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.service_name, "smoothwalker-test");

    let defaults = LoggingConfig::default();
    assert_eq!(defaults.format, LogFormat::Pretty);
    assert_eq!(defaults.service_name, "smoothwalker-reports");
}
