// ABOUTME: HTTP middleware applied around the proxy routes
// ABOUTME: Provides the unconditional CORS response headers

/// CORS response headers
pub mod cors;

pub use cors::with_cors_headers;
