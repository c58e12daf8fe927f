// ABOUTME: OAuth2 authorization code exchange against the Strava token endpoint
// ABOUTME: Sends one JSON token request and returns the provider status and body untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::{OAuthProviderConfig, StravaCredentials};
use crate::constants::strava;
use crate::errors::ExchangeError;
use crate::utils::http_client::oauth_client;
use async_trait::async_trait;
use http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// JSON body posted to the token endpoint
#[derive(Debug, Serialize)]
pub struct TokenExchangeRequest<'a> {
    /// OAuth client ID
    pub client_id: &'a str,
    /// OAuth client secret
    pub client_secret: &'a str,
    /// Authorization code exactly as the caller sent it
    pub code: &'a Value,
    /// Always `authorization_code`
    pub grant_type: &'static str,
}

impl<'a> TokenExchangeRequest<'a> {
    /// Build an authorization code grant request
    #[must_use]
    pub fn authorization_code(credentials: &'a StravaCredentials, code: &'a Value) -> Self {
        Self {
            client_id: credentials.client_id(),
            client_secret: credentials.client_secret(),
            code,
            grant_type: strava::GRANT_TYPE_AUTHORIZATION_CODE,
        }
    }
}

/// Token endpoint answer: status plus an opaque JSON document
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    /// HTTP status returned by the provider
    pub status: StatusCode,
    /// Provider JSON body, never reshaped
    pub body: Value,
}

impl ProviderResponse {
    /// Whether the provider reported success (2xx)
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Performs the outbound authorization code exchange
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    /// Exchange an authorization code for tokens
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON. A
    /// provider rejection with a JSON body is a successful call.
    async fn exchange_code(
        &self,
        credentials: &StravaCredentials,
        code: &Value,
    ) -> Result<ProviderResponse, ExchangeError>;
}

/// OAuth 2.0 client for the Strava token endpoint
#[derive(Debug, Clone)]
pub struct StravaTokenClient {
    client: reqwest::Client,
    token_url: String,
}

impl StravaTokenClient {
    /// Create a client posting to `token_url`
    #[must_use]
    pub fn new(client: reqwest::Client, token_url: impl Into<String>) -> Self {
        Self {
            client,
            token_url: token_url.into(),
        }
    }

    /// Create a client from the Strava provider configuration
    #[must_use]
    pub fn from_config(config: &OAuthProviderConfig) -> Self {
        Self::new(oauth_client(config.request_timeout), &config.token_url)
    }

    /// Token endpoint this client posts to
    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

#[async_trait]
impl TokenExchanger for StravaTokenClient {
    async fn exchange_code(
        &self,
        credentials: &StravaCredentials,
        code: &Value,
    ) -> Result<ProviderResponse, ExchangeError> {
        let request = TokenExchangeRequest::authorization_code(credentials, code);

        let response = self
            .client
            .post(&self.token_url)
            .json(&request)
            .send()
            .await
            .map_err(ExchangeError::Transport)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(ExchangeError::Transport)?;
        let body = serde_json::from_slice(&bytes)
            .map_err(|source| ExchangeError::InvalidResponse { status, source })?;

        debug!(
            provider = strava::PROVIDER_NAME,
            status = status.as_u16(),
            "Token endpoint responded"
        );

        Ok(ProviderResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let credentials = StravaCredentials::new("12345", "shh").unwrap();
        let code = json!("abc");
        let request = TokenExchangeRequest::authorization_code(&credentials, &code);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "client_id": "12345",
                "client_secret": "shh",
                "code": "abc",
                "grant_type": "authorization_code"
            })
        );
    }

    #[test]
    fn test_request_forwards_non_string_code_verbatim() {
        let credentials = StravaCredentials::new("12345", "shh").unwrap();
        let code = json!(987);
        let request = TokenExchangeRequest::authorization_code(&credentials, &code);

        assert_eq!(serde_json::to_value(&request).unwrap()["code"], json!(987));
    }

    #[test]
    fn test_provider_response_success_range() {
        let ok = ProviderResponse {
            status: StatusCode::OK,
            body: json!({}),
        };
        let rejected = ProviderResponse {
            status: StatusCode::UNAUTHORIZED,
            body: json!({}),
        };
        assert!(ok.is_success());
        assert!(!rejected.is_success());
    }

    #[test]
    fn test_from_config_uses_configured_url() {
        let config = OAuthProviderConfig {
            client_id: None,
            client_secret: None,
            token_url: "http://127.0.0.1:9/oauth/token".into(),
            request_timeout: None,
        };
        let client = StravaTokenClient::from_config(&config);
        assert_eq!(client.token_url(), "http://127.0.0.1:9/oauth/token");
    }
}
