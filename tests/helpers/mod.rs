// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-process axum driver and the mock Strava token endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;
pub mod mock_strava;
