// ABOUTME: Route module organization for the token proxy HTTP endpoints
// ABOUTME: Groups the token exchange route and the health check routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Health check and readiness routes
pub mod health;
/// Strava authorization code exchange route
pub mod token;

/// Health check route handlers
pub use health::HealthRoutes;
/// Token exchange route handlers and state
pub use token::{exchange_token, TokenExchangeResponse, TokenExchangeState, TokenRoutes};
