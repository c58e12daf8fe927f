// ABOUTME: Main library entry point for the Strava OAuth token exchange proxy
// ABOUTME: Keeps the Strava client secret server-side while browsers complete the OAuth flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Strava Token Proxy
//!
//! A browser application that connects to Strava receives an authorization
//! code on its redirect page, but exchanging that code for tokens requires the
//! OAuth client secret. This crate exposes a single endpoint that accepts the
//! code, adds the client credentials held by the server, forwards the exchange
//! to Strava, and relays Strava's JSON answer back to the browser.
//!
//! ## Architecture
//!
//! - **config**: credentials and server settings, loaded once at startup
//! - **oauth2_client**: the outbound exchange behind the `TokenExchanger` seam
//! - **routes**: the token route and health checks
//! - **middleware**: unconditional CORS headers
//! - **server**: router assembly and serving
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use strava_token_proxy::{config::ServerConfig, logging, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     logging::init_from_env()?;
//!     server::serve(&config).await
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Application constants
pub mod constants;

/// Error types and HTTP error rendering
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// OAuth 2.0 token exchange client
pub mod oauth2_client;

/// HTTP routes
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Shared utilities
pub mod utils;
