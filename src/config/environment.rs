// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads Strava credentials and server settings once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration
//!
//! Configuration is read from the process environment exactly once, when the
//! server starts, and then injected into the request handlers. Missing Strava
//! credentials are not a startup failure: the server still starts and the
//! token endpoint answers every exchange with a server configuration error.

use crate::constants::{defaults, env_config, strava};
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Validated Strava client credentials
///
/// Both values are guaranteed non-empty. Construct through
/// [`StravaCredentials::new`] or [`OAuthProviderConfig::credentials`].
#[derive(Clone, PartialEq, Eq)]
pub struct StravaCredentials {
    client_id: String,
    client_secret: String,
}

impl StravaCredentials {
    /// Build credentials, returning `None` when either value is empty
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Option<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.is_empty() || client_secret.is_empty() {
            return None;
        }
        Some(Self {
            client_id,
            client_secret,
        })
    }

    /// OAuth client identifier
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth client secret
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for StravaCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StravaCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Strava OAuth provider configuration as read from the environment
#[derive(Clone, Default)]
pub struct OAuthProviderConfig {
    /// OAuth client ID
    pub client_id: Option<String>,
    /// OAuth client secret
    pub client_secret: Option<String>,
    /// Token endpoint URL
    pub token_url: String,
    /// Optional outbound request timeout
    pub request_timeout: Option<Duration>,
}

impl OAuthProviderConfig {
    /// Load Strava OAuth configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if `STRAVA_TOKEN_TIMEOUT_SECS` is set but not a number
    pub fn load_strava() -> Result<Self> {
        let request_timeout = non_empty_var(env_config::STRAVA_TOKEN_TIMEOUT_SECS)
            .map(|raw| {
                raw.parse::<u64>().with_context(|| {
                    format!(
                        "{} must be a whole number of seconds, got '{raw}'",
                        env_config::STRAVA_TOKEN_TIMEOUT_SECS
                    )
                })
            })
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            client_id: non_empty_var(env_config::STRAVA_CLIENT_ID),
            client_secret: non_empty_var(env_config::STRAVA_CLIENT_SECRET),
            token_url: non_empty_var(env_config::STRAVA_TOKEN_URL)
                .unwrap_or_else(|| strava::TOKEN_URL.to_owned()),
            request_timeout,
        })
    }

    /// Validated credentials, or `None` when either value is missing
    #[must_use]
    pub fn credentials(&self) -> Option<StravaCredentials> {
        StravaCredentials::new(
            self.client_id.clone().unwrap_or_default(),
            self.client_secret.clone().unwrap_or_default(),
        )
    }

    /// Log credential diagnostics without revealing the secret
    pub fn validate_and_log(&self) -> bool {
        match (&self.client_id, &self.client_secret) {
            (Some(client_id), Some(client_secret)) => {
                info!(
                    "OAuth provider {}: client_id={client_id}, secret_length={}",
                    strava::PROVIDER_NAME,
                    client_secret.len()
                );
                true
            }
            (client_id, client_secret) => {
                warn!(
                    client_id_present = client_id.is_some(),
                    client_secret_present = client_secret.is_some(),
                    "Missing Strava credentials in environment variables; token exchanges will fail"
                );
                false
            }
        }
    }
}

impl fmt::Debug for OAuthProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthProviderConfig")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("token_url", &self.token_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Strava OAuth configuration
    pub strava: OAuthProviderConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is present but malformed
    pub fn from_env() -> Result<Self> {
        let http_port = non_empty_var(env_config::HTTP_PORT)
            .map(|raw| {
                raw.parse::<u16>().with_context(|| {
                    format!("{} must be a valid port, got '{raw}'", env_config::HTTP_PORT)
                })
            })
            .transpose()?
            .unwrap_or(defaults::HTTP_PORT);

        let config = Self {
            host: non_empty_var(env_config::HOST).unwrap_or_else(|| defaults::HOST.to_owned()),
            http_port,
            environment: non_empty_var(env_config::ENVIRONMENT)
                .map(|raw| Environment::from_str_or_default(&raw))
                .unwrap_or_default(),
            strava: OAuthProviderConfig::load_strava()?,
        };

        config.strava.validate_and_log();
        Ok(config)
    }

    /// One-line redacted description for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Strava token proxy: environment={}, bind={}:{}, token_url={}, credentials={}, timeout={}",
            self.environment,
            self.host,
            self.http_port,
            self.strava.token_url,
            if self.strava.credentials().is_some() {
                "configured"
            } else {
                "missing"
            },
            self.strava
                .request_timeout
                .map_or_else(|| "default".to_owned(), |t| format!("{}s", t.as_secs())),
        )
    }
}

/// Read an environment variable, treating empty values as absent
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
