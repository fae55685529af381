// ABOUTME: Report date range selector (day, week, month)
// ABOUTME: Chooses the window length and axis label strategy of a report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of the window a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    /// Yesterday and today
    Day,
    /// The last seven calendar days, today included
    #[default]
    Week,
    /// The last calendar month
    Month,
}

impl DateRange {
    /// All ranges in segment order
    pub const ALL: [Self; 3] = [Self::Day, Self::Week, Self::Month];

    /// Segment title shown by the range picker
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
        }
    }

    /// Parse from string with fallback to the default range
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "d" => Ok(Self::Day),
            "week" | "w" => Ok(Self::Week),
            "month" | "m" => Ok(Self::Month),
            other => Err(format!("unknown date range: {other}")),
        }
    }
}
