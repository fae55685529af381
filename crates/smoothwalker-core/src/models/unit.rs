// ABOUTME: Health units and quantities with dimension-checked conversion
// ABOUTME: Converts provider quantities into a metric's preferred display unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::unit::UnitError;

/// Physical dimension a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitDimension {
    /// Distance per time
    Speed,
    /// Distance
    Length,
    /// Dimensionless count (steps)
    Count,
    /// Dimensionless ratio
    Fraction,
}

impl UnitDimension {
    /// Unit providers compute statistics in for this dimension
    #[must_use]
    pub const fn base_unit(self) -> HealthUnit {
        match self {
            Self::Speed => HealthUnit::MetersPerSecond,
            Self::Length => HealthUnit::Meter,
            Self::Count => HealthUnit::Count,
            Self::Fraction => HealthUnit::Percent,
        }
    }
}

/// Units a health quantity can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthUnit {
    /// m/s
    MetersPerSecond,
    /// mi/hr
    MilesPerHour,
    /// km/hr
    KilometersPerHour,
    /// m
    Meter,
    /// cm
    Centimeter,
    /// km
    Kilometer,
    /// mi
    Mile,
    /// count
    Count,
    /// %
    Percent,
}

impl HealthUnit {
    /// Dimension measured by this unit
    #[must_use]
    pub const fn dimension(self) -> UnitDimension {
        match self {
            Self::MetersPerSecond | Self::MilesPerHour | Self::KilometersPerHour => {
                UnitDimension::Speed
            }
            Self::Meter | Self::Centimeter | Self::Kilometer | Self::Mile => UnitDimension::Length,
            Self::Count => UnitDimension::Count,
            Self::Percent => UnitDimension::Fraction,
        }
    }

    /// Multiplier from this unit to the dimension's base unit
    /// (m/s, m, count, ratio)
    const fn to_base_factor(self) -> f64 {
        match self {
            Self::MetersPerSecond | Self::Meter | Self::Count => 1.0,
            Self::MilesPerHour => 0.447_04,
            Self::KilometersPerHour => 1.0 / 3.6,
            Self::Centimeter | Self::Percent => 0.01,
            Self::Kilometer => 1_000.0,
            Self::Mile => 1_609.344,
        }
    }

    /// Unit symbol as written in unit strings (e.g. `mi/hr`)
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::MilesPerHour => "mi/hr",
            Self::KilometersPerHour => "km/hr",
            Self::Meter => "m",
            Self::Centimeter => "cm",
            Self::Kilometer => "km",
            Self::Mile => "mi",
            Self::Count => "count",
            Self::Percent => "%",
        }
    }

    /// Human readable unit title used for chart series
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::MilesPerHour => "mph",
            Self::KilometersPerHour => "km/h",
            Self::Meter => "meters",
            Self::Centimeter => "cm",
            Self::Kilometer => "km",
            Self::Mile => "miles",
            Self::Count => "steps",
            Self::Percent => "%",
        }
    }
}

impl fmt::Display for HealthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A scalar amount tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Amount expressed in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: HealthUnit,
}

impl Quantity {
    /// Create a quantity
    #[must_use]
    pub const fn new(value: f64, unit: HealthUnit) -> Self {
        Self { value, unit }
    }

    /// Value of this quantity expressed in `unit`
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleUnits` when `unit` measures a different dimension.
    pub fn double_value(&self, unit: HealthUnit) -> Result<f64, UnitError> {
        if self.unit == unit {
            return Ok(self.value);
        }
        if self.unit.dimension() != unit.dimension() {
            return Err(UnitError::IncompatibleUnits {
                from: self.unit,
                to: unit,
            });
        }
        Ok(self.value * self.unit.to_base_factor() / unit.to_base_factor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_speed_conversion() {
        let speed = Quantity::new(1.430_528, HealthUnit::MetersPerSecond);
        assert_close(speed.double_value(HealthUnit::MilesPerHour).unwrap(), 3.2);

        let kmh = Quantity::new(3.6, HealthUnit::KilometersPerHour);
        assert_close(kmh.double_value(HealthUnit::MetersPerSecond).unwrap(), 1.0);
    }

    #[test]
    fn test_same_unit_is_identity() {
        let steps = Quantity::new(5_230.0, HealthUnit::Count);
        assert_eq!(steps.double_value(HealthUnit::Count).unwrap(), 5_230.0);
    }

    #[test]
    fn test_length_and_percent_conversion() {
        let mile = Quantity::new(1.0, HealthUnit::Mile);
        assert_close(mile.double_value(HealthUnit::Meter).unwrap(), 1_609.344);

        let stride = Quantity::new(0.72, HealthUnit::Meter);
        assert_close(stride.double_value(HealthUnit::Centimeter).unwrap(), 72.0);

        let ratio = Quantity::new(50.0, HealthUnit::Percent);
        assert_close(ratio.double_value(HealthUnit::Percent).unwrap(), 50.0);
    }

    #[test]
    fn test_incompatible_dimensions_are_rejected() {
        let steps = Quantity::new(10.0, HealthUnit::Count);
        assert_eq!(
            steps.double_value(HealthUnit::Meter),
            Err(UnitError::IncompatibleUnits {
                from: HealthUnit::Count,
                to: HealthUnit::Meter,
            })
        );
    }
}
