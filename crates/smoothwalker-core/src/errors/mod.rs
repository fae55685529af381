// ABOUTME: Error types shared by the provider layer and the report engine
// ABOUTME: Groups provider failures and unit conversion errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmoothWalker Contributors

/// Health data provider errors
pub mod provider;

/// Unit conversion errors
pub mod unit;
