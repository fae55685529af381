// ABOUTME: Application constants shared across the SmoothWalker crates
// ABOUTME: Weekday titles, provider names, environment variable keys, and label formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the logging layer at startup
    pub const SMOOTHWALKER_REPORTS: &str = "smoothwalker-reports";
}

/// Provider identifiers
pub mod provider_names {
    /// In-memory synthetic health store
    pub const SYNTHETIC: &str = "synthetic";
}

/// Short weekday titles, Sunday first
pub const WEEKDAY_TITLES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Days added to a month window's start to place the middle axis marker
pub const MONTH_AXIS_MID_OFFSET_DAYS: i64 = 15;

/// Date formats used by chart labels (chrono strftime syntax)
pub mod label_formats {
    /// Axis marker format, e.g. `06/10`
    pub const MONTH_DAY_NUMERIC: &str = "%m/%d";
    /// Range label start, e.g. `Jun 3`
    pub const MONTH_DAY: &str = "%b %-d";
    /// Range label end, e.g. `Jun 10, 2020`
    pub const MONTH_DAY_YEAR: &str = "%b %-d, %Y";
    /// Range label end when both ends share a month, e.g. `10, 2020`
    pub const DAY_YEAR: &str = "%-d, %Y";
}

/// Environment variable keys read by the configuration layer
pub mod env_keys {
    /// Metric identifier to report on (e.g. `walking_speed`)
    pub const METRIC: &str = "SMOOTHWALKER_METRIC";
    /// Initial date range (`day`, `week`, `month`)
    pub const DEFAULT_RANGE: &str = "SMOOTHWALKER_DEFAULT_RANGE";
    /// Fixed UTC offset of the report calendar, in minutes
    pub const UTC_OFFSET_MINUTES: &str = "SMOOTHWALKER_UTC_OFFSET_MINUTES";
}
