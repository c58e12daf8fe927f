// ABOUTME: Configuration module for the token proxy
// ABOUTME: Exposes the environment-loaded server configuration and Strava credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, OAuthProviderConfig, ServerConfig, StravaCredentials};
