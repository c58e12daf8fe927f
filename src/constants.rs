// ABOUTME: Application constants for the Strava token proxy
// ABOUTME: Centralizes endpoint paths, environment variable names, and client-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Strava OAuth endpoints and grant parameters
pub mod strava {
    /// Strava token endpoint used for the authorization code exchange
    pub const TOKEN_URL: &str = "https://www.strava.com/oauth/token";
    /// Grant type sent with every exchange
    pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";
    /// Provider name used in logs
    pub const PROVIDER_NAME: &str = "strava";
}

/// Environment variable names read by `ServerConfig::from_env`
pub mod env_config {
    /// OAuth client identifier issued by Strava
    pub const STRAVA_CLIENT_ID: &str = "STRAVA_CLIENT_ID";
    /// OAuth client secret issued by Strava
    pub const STRAVA_CLIENT_SECRET: &str = "STRAVA_CLIENT_SECRET";
    /// Override for the Strava token endpoint
    pub const STRAVA_TOKEN_URL: &str = "STRAVA_TOKEN_URL";
    /// Optional outbound request timeout in seconds
    pub const STRAVA_TOKEN_TIMEOUT_SECS: &str = "STRAVA_TOKEN_TIMEOUT_SECS";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Server defaults
pub mod defaults {
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;
}

/// Route paths
pub mod routes {
    /// Token exchange endpoint
    pub const STRAVA_TOKEN: &str = "/api/strava/token";
    /// Liveness endpoint
    pub const HEALTH: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
}

/// CORS header values sent on every response
pub mod cors {
    /// `Access-Control-Allow-Origin`
    pub const ALLOW_ORIGIN: &str = "*";
    /// `Access-Control-Allow-Methods`
    pub const ALLOW_METHODS: &str = "POST, OPTIONS";
    /// `Access-Control-Allow-Headers`
    pub const ALLOW_HEADERS: &str = "Content-Type";
}

/// Client-facing error messages
pub mod error_messages {
    /// Method other than POST or OPTIONS
    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
    /// Request body carried no usable `code`
    pub const MISSING_AUTHORIZATION_CODE: &str = "Missing authorization code";
    /// Client credentials are not configured
    pub const SERVER_CONFIGURATION_ERROR: &str = "Server configuration error";
    /// Transport or parse failure talking to Strava
    pub const FAILED_TO_EXCHANGE_TOKEN: &str = "Failed to exchange token";
}

/// Service identity for structured logging
pub mod service_names {
    /// Default service name
    pub const STRAVA_TOKEN_PROXY: &str = "strava-token-proxy";
}
