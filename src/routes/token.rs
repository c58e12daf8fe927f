// ABOUTME: Strava token exchange route that keeps the OAuth client secret server-side
// ABOUTME: Validates method and code, adds credentials, and relays the provider answer verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token exchange route
//!
//! ## Endpoint
//!
//! - `ANY /api/strava/token`
//!   - `OPTIONS` answers the CORS preflight with an empty 200
//!   - `POST {"code": "...", "redirect_uri": "..."}` performs the exchange
//!   - anything else is rejected with 405
//!
//! `redirect_uri` is accepted for client compatibility but is not forwarded:
//! Strava does not require it for the authorization code grant.

use crate::config::{ServerConfig, StravaCredentials};
use crate::constants::{routes, strava};
use crate::errors::{AppError, AppResult};
use crate::oauth2_client::{ProviderResponse, StravaTokenClient, TokenExchanger};
use crate::utils::json::is_truthy;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Shared, immutable state for the token route
#[derive(Clone)]
pub struct TokenExchangeState {
    credentials: Option<StravaCredentials>,
    exchanger: Arc<dyn TokenExchanger>,
}

impl TokenExchangeState {
    /// Create state from explicit credentials and exchanger
    #[must_use]
    pub fn new(credentials: Option<StravaCredentials>, exchanger: Arc<dyn TokenExchanger>) -> Self {
        Self {
            credentials,
            exchanger,
        }
    }

    /// Create state backed by the real Strava token endpoint
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.strava.credentials(),
            Arc::new(StravaTokenClient::from_config(&config.strava)),
        )
    }

    /// Whether client credentials are available for exchanges
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

/// Fields read from the caller's JSON body
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AuthorizationRequest {
    /// Authorization code, present only when truthy
    pub code: Option<Value>,
    /// Redirect URI sent by the client; never forwarded
    pub redirect_uri: Option<Value>,
}

impl AuthorizationRequest {
    /// Parse leniently: a body that is not a JSON object carries no fields
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        let Ok(Value::Object(mut fields)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };

        Self {
            code: fields.remove("code").filter(is_truthy),
            redirect_uri: fields.remove("redirect_uri"),
        }
    }
}

/// Successful outcome of the token route
#[derive(Debug, Clone, PartialEq)]
pub enum TokenExchangeResponse {
    /// CORS preflight: 200 with an empty body
    Preflight,
    /// Provider answer relayed to the caller
    Relayed(ProviderResponse),
}

impl IntoResponse for TokenExchangeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Preflight => StatusCode::OK.into_response(),
            Self::Relayed(provider) => {
                let status = if provider.is_success() {
                    StatusCode::OK
                } else {
                    provider.status
                };
                (status, Json(provider.body)).into_response()
            }
        }
    }
}

/// Run one token exchange
///
/// # Errors
///
/// Returns an error for a wrong method, a missing code, missing credentials,
/// or a transport/parse failure. A provider rejection is not an error: it is
/// returned as [`TokenExchangeResponse::Relayed`] with the provider status.
pub async fn exchange_token(
    method: &Method,
    body: &[u8],
    credentials: Option<&StravaCredentials>,
    exchanger: &dyn TokenExchanger,
) -> AppResult<TokenExchangeResponse> {
    if method == Method::OPTIONS {
        return Ok(TokenExchangeResponse::Preflight);
    }
    if method != Method::POST {
        return Err(AppError::method_not_allowed());
    }

    let request = AuthorizationRequest::from_body(body);
    let Some(code) = request.code else {
        return Err(AppError::missing_authorization_code());
    };
    if let Some(redirect_uri) = &request.redirect_uri {
        debug!(%redirect_uri, "Ignoring redirect_uri for authorization code exchange");
    }

    let Some(credentials) = credentials else {
        error!("Missing Strava credentials in environment variables");
        return Err(AppError::server_configuration());
    };

    let provider = exchanger
        .exchange_code(credentials, &code)
        .await
        .map_err(|e| {
            error!(error = %e, "Token exchange error");
            AppError::token_exchange_failed(e)
        })?;

    if provider.is_success() {
        info!(
            provider = strava::PROVIDER_NAME,
            "Authorization code exchanged"
        );
    } else {
        error!(
            provider = strava::PROVIDER_NAME,
            status = provider.status.as_u16(),
            body = %provider.body,
            "Strava token exchange failed"
        );
    }

    Ok(TokenExchangeResponse::Relayed(provider))
}

/// Token exchange routes
pub struct TokenRoutes;

impl TokenRoutes {
    /// Create the token exchange route
    pub fn routes(state: TokenExchangeState) -> Router {
        Router::new()
            .route(routes::STRAVA_TOKEN, any(Self::handle_token))
            .with_state(Arc::new(state))
    }

    /// Handle any method on the token endpoint
    async fn handle_token(
        State(state): State<Arc<TokenExchangeState>>,
        method: Method,
        body: Bytes,
    ) -> Result<TokenExchangeResponse, AppError> {
        exchange_token(
            &method,
            &body,
            state.credentials.as_ref(),
            state.exchanger.as_ref(),
        )
        .await
    }
}
