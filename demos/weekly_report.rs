// ABOUTME: Demo printing a mobility report from a synthetic health store
// ABOUTME: Reads report and logging configuration from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

//! Run with `cargo run --example weekly_report -- month`.

use anyhow::Result;
use chrono::{Duration, Utc};
use smoothwalker::chart::{format_value, series_title};
use smoothwalker::config::ReportConfig;
use smoothwalker::logging;
use smoothwalker::report::{ReportView, ReportViewModel};
use smoothwalker::{DateRange, HealthMetric, HealthUnit, Quantity, QuantitySample, SyntheticHealthStore};
use std::sync::Arc;
use tracing::info;

struct LoggingView;

impl ReportView for LoggingView {
    fn refresh(&self) {
        info!("report view refreshed");
    }
}

/// A few samples per day for the last five weeks, skipping every fourth day
fn sample_history(metric: HealthMetric) -> Vec<QuantitySample> {
    let now = Utc::now();
    let base = metric.preferred_unit().dimension().base_unit();
    (0..35_i64)
        .filter(|day| day % 4 != 3)
        .flat_map(|day| {
            (0..3_i64).map(move |slot| {
                let value = match base {
                    HealthUnit::MetersPerSecond => 1.25 + slot as f64 * 0.1,
                    HealthUnit::Count => 1_500.0 + (day * 37 % 900) as f64,
                    HealthUnit::Percent => 20.0 + slot as f64,
                    _ => 0.65 + day as f64 * 0.002,
                };
                QuantitySample::new(
                    metric,
                    Quantity::new(value, base),
                    now - Duration::days(day) - Duration::hours(2 + slot * 3),
                )
            })
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env()?;

    let config = ReportConfig::from_env()?;
    let range = std::env::args()
        .nth(1)
        .map_or(config.default_range, |arg| DateRange::from_str_or_default(&arg));

    let store = Arc::new(SyntheticHealthStore::with_samples(
        config.calendar(),
        sample_history(config.metric),
    ));
    let model = ReportViewModel::from_config(store, &config);
    let view: Arc<dyn ReportView> = Arc::new(LoggingView);
    model.attach_view(&view);

    let now = Utc::now();
    model.set_date_range_and_reload_at(range, now).await;

    if let Some(error) = model.last_error() {
        anyhow::bail!("report failed: {error}");
    }

    let calendar = config.calendar();
    println!("{}", model.title());
    println!("{} {}", model.chart_title(), model.chart_date_range_label(now)?);
    println!("axis: {}", model.horizontal_axis_markers(now)?.join(" "));
    println!("series: {}", series_title(config.metric));
    for value in model.data_values() {
        println!(
            "  {}  {}",
            calendar.format(value.start_date, "%Y-%m-%d"),
            format_value(value.value, config.metric)
        );
    }
    println!("{}", model.chart_last_updated_label(now));

    Ok(())
}
