// ABOUTME: Time-zone aware calendar arithmetic for report windows and day buckets
// ABOUTME: Day and month offsets are calendar offsets, not elapsed seconds, so DST is handled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

//! # Report Calendar
//!
//! Every boundary a report uses (window start, bucket edges, axis labels) is a
//! local calendar boundary in the user's time zone. Instants cross crate
//! boundaries as `DateTime<Utc>`; `ReportCalendar` converts them into local
//! wall-clock time, does the arithmetic on dates, and converts back.
//!
//! Local times that do not exist (spring-forward gaps) resolve to the first
//! valid instant after the gap. Ambiguous local times (fall-back overlaps)
//! resolve to the earlier instant.

use chrono::{
    DateTime, Datelike, Days, Duration, LocalResult, Months, NaiveDate, NaiveDateTime, TimeZone,
    Utc, Weekday,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Longest DST gap searched when a local time does not exist
const MAX_GAP_MINUTES: i64 = 4 * 60;

/// Step used while searching past a DST gap
const GAP_STEP_MINUTES: i64 = 15;

/// Half-open interval `[start, end)` between two instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInterval {
    /// Inclusive start
    pub start: DateTime<Utc>,
    /// Exclusive end
    pub end: DateTime<Utc>,
}

impl DateInterval {
    /// Create an interval
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether `instant` falls inside `[start, end)`
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Elapsed time covered by the interval
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Calendar in a fixed time zone
#[derive(Debug, Clone)]
pub struct ReportCalendar<Tz: TimeZone> {
    time_zone: Tz,
}

impl Default for ReportCalendar<Utc> {
    fn default() -> Self {
        Self::new(Utc)
    }
}

impl<Tz: TimeZone> ReportCalendar<Tz> {
    /// Create a calendar for `time_zone`
    #[must_use]
    pub const fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    /// Time zone of this calendar
    #[must_use]
    pub const fn time_zone(&self) -> &Tz {
        &self.time_zone
    }

    /// `instant` in local time
    #[must_use]
    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.time_zone)
    }

    /// Local calendar date of `instant`
    #[must_use]
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.local(instant).date_naive()
    }

    /// Local weekday of `instant`
    #[must_use]
    pub fn weekday(&self, instant: DateTime<Utc>) -> Weekday {
        self.local(instant).weekday()
    }

    /// Resolve a local wall-clock time to an instant.
    ///
    /// Ambiguous times take the earlier instant, missing times move forward
    /// past the gap. Returns `None` only when no valid instant exists nearby.
    #[must_use]
    pub fn resolve_local(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self.time_zone.from_local_datetime(&local) {
            LocalResult::Single(instant) => Some(instant.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
            LocalResult::None => {
                debug!(%local, "local time falls in a DST gap, moving forward");
                (1..=MAX_GAP_MINUTES / GAP_STEP_MINUTES)
                    .filter_map(|step| {
                        local.checked_add_signed(Duration::minutes(step * GAP_STEP_MINUTES))
                    })
                    .find_map(|candidate| self.time_zone.from_local_datetime(&candidate).earliest())
                    .map(|instant| instant.with_timezone(&Utc))
            }
        }
    }

    /// First instant of local calendar day `date`
    #[must_use]
    pub fn start_of_date(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.resolve_local(date.and_hms_opt(0, 0, 0)?)
    }

    /// First instant of the local calendar day containing `instant`
    #[must_use]
    pub fn start_of_day(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.start_of_date(self.local_date(instant))
    }

    /// Same local wall-clock time `days` calendar days later (negative moves back)
    #[must_use]
    pub fn add_days(&self, instant: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
        let local = self.local(instant).naive_local();
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            local.checked_add_days(magnitude)?
        } else {
            local.checked_sub_days(magnitude)?
        };
        self.resolve_local(shifted)
    }

    /// Same local wall-clock time `months` calendar months earlier.
    ///
    /// Days past the end of the target month clamp to its last day
    /// (March 31 minus one month is February 28 or 29).
    #[must_use]
    pub fn sub_months(&self, instant: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
        let local = self.local(instant).naive_local();
        self.resolve_local(local.checked_sub_months(Months::new(months))?)
    }

    /// One-day buckets from the local day containing `first` through the
    /// local day containing `last`.
    ///
    /// Each bucket spans one local calendar day (23 or 25 hours across DST
    /// changes). The last bucket keeps its full-day end even when `last` falls
    /// inside it, or is its first instant.
    #[must_use]
    pub fn day_buckets(&self, first: DateTime<Utc>, last: DateTime<Utc>) -> Vec<DateInterval> {
        self.buckets(first, last, 1)
    }

    /// Buckets of `days` local calendar days covering the local days from
    /// `first` through `last`.
    ///
    /// Every bucket edge is the start of a local date, never a shifted
    /// instant, so a midnight lost to a DST gap only moves that one edge.
    #[must_use]
    pub fn buckets(&self, first: DateTime<Utc>, last: DateTime<Utc>, days: u32) -> Vec<DateInterval> {
        let mut buckets = Vec::new();
        if days == 0 || last < first {
            return buckets;
        }
        let step = Days::new(u64::from(days));
        let last_date = self.local_date(last);
        let mut date = self.local_date(first);

        while date <= last_date {
            let Some(next) = date.checked_add_days(step) else {
                debug!(%date, "calendar overflow while building buckets");
                break;
            };
            let (Some(start), Some(end)) = (self.start_of_date(date), self.start_of_date(next))
            else {
                debug!(%date, "no local midnight found while building buckets");
                break;
            };
            buckets.push(DateInterval::new(start, end));
            date = next;
        }

        buckets
    }

    /// Format `instant` in local time with a strftime pattern
    #[must_use]
    pub fn format(&self, instant: DateTime<Utc>, pattern: &str) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.local(instant).format(pattern).to_string()
    }
}
