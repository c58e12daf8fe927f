// ABOUTME: Utility modules for common functionality across the proxy
// ABOUTME: Contains HTTP client construction and JSON value helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// HTTP client configuration and helpers
pub mod http_client;
/// JSON value helpers
pub mod json;
