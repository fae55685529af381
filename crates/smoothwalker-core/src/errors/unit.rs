// ABOUTME: Unit conversion error type
// ABOUTME: Raised when a quantity is read in a unit of a different dimension
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

use thiserror::Error;

use crate::models::HealthUnit;

/// Unit conversion failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Source and target units measure different dimensions
    #[error("cannot convert {from} to {to}: incompatible dimensions")]
    IncompatibleUnits {
        /// Unit the quantity is stored in
        from: HealthUnit,
        /// Requested unit
        to: HealthUnit,
    },
}
