// ABOUTME: Report window computation for day, week and month date ranges
// ABOUTME: Windows start at a local midnight and end at the reference instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

use chrono::{DateTime, Days, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use smoothwalker_core::{DateInterval, DateRange, ReportCalendar};
use smoothwalker_providers::BucketInterval;

use crate::errors::{AggregationError, AggregationResult};

/// Half-open report window `[start, end)` and its bucket length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// Local midnight of the first day shown
    pub start: DateTime<Utc>,
    /// Reference instant (usually now)
    pub end: DateTime<Utc>,
    /// Bucket length, always one day for reports
    pub interval: BucketInterval,
}

impl DateWindow {
    /// Window bounds as an interval
    #[must_use]
    pub const fn as_interval(&self) -> DateInterval {
        DateInterval::new(self.start, self.end)
    }

    /// Buckets of this window in chronological order.
    ///
    /// The reference's own local day is always included, even when `end`
    /// is its first instant.
    #[must_use]
    pub fn buckets<Tz: TimeZone>(&self, calendar: &ReportCalendar<Tz>) -> Vec<DateInterval> {
        calendar.buckets(self.start, self.end, self.interval.days)
    }
}

/// Compute the window shown for `range` when the report ends at `reference_end`.
///
/// - `Day`: yesterday and today
/// - `Week`: today and the six days before it
/// - `Month`: from the same time one calendar month earlier, truncated to midnight
///
/// # Errors
///
/// Returns `AggregationError::InvalidWindow` when the calendar arithmetic
/// leaves the representable range.
pub fn compute_window<Tz: TimeZone>(
    range: DateRange,
    reference_end: DateTime<Utc>,
    calendar: &ReportCalendar<Tz>,
) -> AggregationResult<DateWindow> {
    let invalid = || AggregationError::InvalidWindow {
        range,
        reference: reference_end,
    };

    let start = match range {
        DateRange::Day | DateRange::Week => {
            let days_back = if range == DateRange::Day { 1 } else { 6 };
            let first_day = calendar
                .local_date(reference_end)
                .checked_sub_days(Days::new(days_back))
                .ok_or_else(invalid)?;
            calendar.start_of_date(first_day).ok_or_else(invalid)?
        }
        DateRange::Month => {
            let month_ago = calendar.sub_months(reference_end, 1).ok_or_else(invalid)?;
            calendar.start_of_day(month_ago).ok_or_else(invalid)?
        }
    };

    if start >= reference_end {
        return Err(invalid());
    }

    Ok(DateWindow {
        start,
        end: reference_end,
        interval: BucketInterval::DAY,
    })
}
