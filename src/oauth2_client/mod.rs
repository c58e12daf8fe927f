// ABOUTME: OAuth 2.0 client used to exchange authorization codes with Strava
// ABOUTME: Defines the exchanger seam and its reqwest-backed implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # OAuth 2.0 Client Module
//!
//! The proxy acts as the confidential OAuth client on behalf of a browser
//! application: it adds the client credentials to the caller's authorization
//! code and forwards the exchange to Strava. The [`TokenExchanger`] trait is
//! the seam tests use to replace the network call.

/// Token endpoint client implementation
pub mod client;

pub use client::{ProviderResponse, StravaTokenClient, TokenExchangeRequest, TokenExchanger};
