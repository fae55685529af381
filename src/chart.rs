// ABOUTME: Chart header labels and horizontal axis markers for report windows
// ABOUTME: Weekday titles for day/week charts, month-day markers for month charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

use chrono::{DateTime, Datelike, TimeZone, Utc};
use smoothwalker_core::constants::{label_formats, MONTH_AXIS_MID_OFFSET_DAYS, WEEKDAY_TITLES};
use smoothwalker_core::{DateRange, HealthMetric, HealthUnit, ReportCalendar};
use std::fmt::Display;

use crate::aggregation::compute_window;
use crate::errors::{AggregationError, AggregationResult};

/// Weekday titles of the seven days ending on `last_date`'s weekday, oldest first
fn weekdays_ending_at<Tz: TimeZone>(
    last_date: DateTime<Utc>,
    calendar: &ReportCalendar<Tz>,
) -> Vec<&'static str> {
    let last = calendar.weekday(last_date).num_days_from_sunday() as usize;
    (1..=WEEKDAY_TITLES.len())
        .map(|offset| WEEKDAY_TITLES[(last + offset) % WEEKDAY_TITLES.len()])
        .collect()
}

/// Horizontal axis markers for a chart whose last bar is `last_date`.
///
/// Day charts get the last two weekday titles, week charts seven. Month
/// charts get three `MM/dd` markers: window start, fifteen days later, and
/// `last_date`.
///
/// # Errors
///
/// Returns `AggregationError::InvalidWindow` when the month window cannot be computed.
pub fn horizontal_axis_markers<Tz>(
    range: DateRange,
    last_date: DateTime<Utc>,
    calendar: &ReportCalendar<Tz>,
) -> AggregationResult<Vec<String>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match range {
        DateRange::Day | DateRange::Week => {
            let weekdays = weekdays_ending_at(last_date, calendar);
            let keep = if range == DateRange::Day { 2 } else { weekdays.len() };
            Ok(weekdays[weekdays.len() - keep..]
                .iter()
                .map(|title| (*title).to_owned())
                .collect())
        }
        DateRange::Month => {
            let start = compute_window(range, last_date, calendar)?.start;
            let middle = calendar
                .add_days(start, MONTH_AXIS_MID_OFFSET_DAYS)
                .ok_or(AggregationError::InvalidWindow {
                    range,
                    reference: last_date,
                })?;
            Ok(axis_markers_for_dates(&[start, middle, last_date], calendar))
        }
    }
}

/// `MM/dd` marker for each date
pub fn axis_markers_for_dates<Tz>(dates: &[DateTime<Utc>], calendar: &ReportCalendar<Tz>) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dates
        .iter()
        .map(|date| calendar.format(*date, label_formats::MONTH_DAY_NUMERIC))
        .collect()
}

/// Header label for the chart's date span, e.g. `Jun 4–10, 2020`.
///
/// # Errors
///
/// Returns `AggregationError::InvalidWindow` when the window cannot be computed.
pub fn chart_date_range_label<Tz>(
    range: DateRange,
    last_date: DateTime<Utc>,
    calendar: &ReportCalendar<Tz>,
) -> AggregationResult<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let start = compute_window(range, last_date, calendar)?.start;
    let start_local = calendar.local(start);
    let end_local = calendar.local(last_date);
    let same_year = start_local.year() == end_local.year();
    let same_month = same_year && start_local.month() == end_local.month();

    let start_label = calendar.format(
        start,
        if same_year {
            label_formats::MONTH_DAY
        } else {
            label_formats::MONTH_DAY_YEAR
        },
    );
    let end_label = calendar.format(
        last_date,
        if same_month {
            label_formats::DAY_YEAR
        } else {
            label_formats::MONTH_DAY_YEAR
        },
    );

    Ok(format!("{start_label}–{end_label}"))
}

/// Footer label, e.g. `last updated on Jun 10, 2020`
pub fn chart_last_updated_label<Tz>(date: DateTime<Utc>, calendar: &ReportCalendar<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "last updated on {}",
        calendar.format(date, label_formats::MONTH_DAY_YEAR)
    )
}

/// Display text for one value of `metric`, e.g. `3.20 mph` or `5230 steps`
#[must_use]
pub fn format_value(value: f64, metric: HealthMetric) -> String {
    let unit = metric.preferred_unit();
    let number = match unit {
        HealthUnit::Count => format!("{value:.0}"),
        HealthUnit::Percent => format!("{value:.1}"),
        _ => format!("{value:.2}"),
    };
    if unit == HealthUnit::Percent {
        format!("{number}{}", unit.display_name())
    } else {
        format!("{number} {}", unit.display_name())
    }
}

/// Chart header title for `metric`, e.g. `Walking Speed`
#[must_use]
pub fn chart_title(metric: HealthMetric) -> &'static str {
    metric.display_name()
}

/// Chart series title for `metric`, the preferred unit's display name
#[must_use]
pub fn series_title(metric: HealthMetric) -> &'static str {
    metric.preferred_unit().display_name()
}
