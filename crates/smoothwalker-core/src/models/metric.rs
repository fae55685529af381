// ABOUTME: Health metric identifiers and their per-metric configuration table
// ABOUTME: Maps each metric to display name, preferred unit, and statistics operator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::unit::HealthUnit;

/// Kind of health sample a report queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthMetric {
    /// Average walking speed
    WalkingSpeed,
    /// Steps taken
    StepCount,
    /// Distance covered walking or running
    DistanceWalkingRunning,
    /// Distance covered in a six-minute walk test
    SixMinuteWalkTestDistance,
    /// Average step length
    WalkingStepLength,
    /// Share of steps with asymmetric timing
    WalkingAsymmetryPercentage,
    /// Share of time both feet touch the ground
    WalkingDoubleSupportPercentage,
}

/// How samples of a metric combine over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationStyle {
    /// Samples are point measurements; buckets are averaged
    Discrete,
    /// Samples are amounts; buckets are summed
    Cumulative,
}

/// Reduction applied to the samples of one bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticsOption {
    /// Arithmetic mean of sample values
    Average,
    /// Sum of sample values
    Sum,
    /// Smallest sample value
    Minimum,
    /// Largest sample value
    Maximum,
}

/// Static configuration of one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    /// Metric this row describes
    pub metric: HealthMetric,
    /// Stable string identifier
    pub identifier: &'static str,
    /// Name shown in chart headers
    pub display_name: &'static str,
    /// Navigation title of the report screen
    pub report_title: &'static str,
    /// Unit values are reported in
    pub preferred_unit: HealthUnit,
    /// How samples combine
    pub aggregation: AggregationStyle,
}

impl MetricDescriptor {
    /// Statistics operator used for this metric's buckets
    #[must_use]
    pub const fn statistics_option(&self) -> StatisticsOption {
        match self.aggregation {
            AggregationStyle::Cumulative => StatisticsOption::Sum,
            AggregationStyle::Discrete => StatisticsOption::Average,
        }
    }
}

const METRIC_TABLE: [MetricDescriptor; 7] = [
    MetricDescriptor {
        metric: HealthMetric::WalkingSpeed,
        identifier: "walking_speed",
        display_name: "Walking Speed",
        report_title: "🚶🏼‍♀️Avg Walking Speed",
        preferred_unit: HealthUnit::MilesPerHour,
        aggregation: AggregationStyle::Discrete,
    },
    MetricDescriptor {
        metric: HealthMetric::StepCount,
        identifier: "step_count",
        display_name: "Step Count",
        report_title: "Daily Steps",
        preferred_unit: HealthUnit::Count,
        aggregation: AggregationStyle::Cumulative,
    },
    MetricDescriptor {
        metric: HealthMetric::DistanceWalkingRunning,
        identifier: "distance_walking_running",
        display_name: "Distance Walking Running",
        report_title: "Daily Walking Distance",
        preferred_unit: HealthUnit::Meter,
        aggregation: AggregationStyle::Cumulative,
    },
    MetricDescriptor {
        metric: HealthMetric::SixMinuteWalkTestDistance,
        identifier: "six_minute_walk_test_distance",
        display_name: "Six-Minute Walk",
        report_title: "Avg Six-Minute Walk",
        preferred_unit: HealthUnit::Meter,
        aggregation: AggregationStyle::Discrete,
    },
    MetricDescriptor {
        metric: HealthMetric::WalkingStepLength,
        identifier: "walking_step_length",
        display_name: "Walking Step Length",
        report_title: "Avg Walking Step Length",
        preferred_unit: HealthUnit::Centimeter,
        aggregation: AggregationStyle::Discrete,
    },
    MetricDescriptor {
        metric: HealthMetric::WalkingAsymmetryPercentage,
        identifier: "walking_asymmetry_percentage",
        display_name: "Walking Asymmetry",
        report_title: "Avg Walking Asymmetry",
        preferred_unit: HealthUnit::Percent,
        aggregation: AggregationStyle::Discrete,
    },
    MetricDescriptor {
        metric: HealthMetric::WalkingDoubleSupportPercentage,
        identifier: "walking_double_support_percentage",
        display_name: "Walking Double Support",
        report_title: "Avg Walking Double Support",
        preferred_unit: HealthUnit::Percent,
        aggregation: AggregationStyle::Discrete,
    },
];

impl HealthMetric {
    /// Every supported metric
    pub const ALL: [Self; 7] = [
        Self::WalkingSpeed,
        Self::StepCount,
        Self::DistanceWalkingRunning,
        Self::SixMinuteWalkTestDistance,
        Self::WalkingStepLength,
        Self::WalkingAsymmetryPercentage,
        Self::WalkingDoubleSupportPercentage,
    ];

    /// Configuration row for this metric
    #[must_use]
    pub fn descriptor(self) -> &'static MetricDescriptor {
        // METRIC_TABLE rows follow the enum declaration order
        &METRIC_TABLE[self as usize]
    }

    /// Stable string identifier
    #[must_use]
    pub fn identifier(self) -> &'static str {
        self.descriptor().identifier
    }

    /// Name shown in chart headers
    #[must_use]
    pub fn display_name(self) -> &'static str {
        self.descriptor().display_name
    }

    /// Unit values are reported in
    #[must_use]
    pub fn preferred_unit(self) -> HealthUnit {
        self.descriptor().preferred_unit
    }

    /// Statistics operator applied to this metric's buckets
    #[must_use]
    pub fn statistics_option(self) -> StatisticsOption {
        self.descriptor().statistics_option()
    }
}

impl fmt::Display for HealthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for HealthMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        METRIC_TABLE
            .iter()
            .find(|row| row.identifier == wanted)
            .map(|row| row.metric)
            .ok_or_else(|| format!("unknown health metric: {s}"))
    }
}
