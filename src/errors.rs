// ABOUTME: Unified error types for the token proxy with HTTP status mapping
// ABOUTME: Renders every handler failure as a JSON body carrying a single `error` field
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Error Handling
//!
//! Handler failures are expressed as [`AppError`], a code plus a client-facing
//! message. The code decides the HTTP status and the message becomes the
//! `error` field of the JSON response body. Failures of the outbound Strava
//! call are expressed as [`ExchangeError`] and collapsed into a generic
//! [`AppError`] before they reach the caller.

use crate::constants::error_messages;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error codes surfaced by the token exchange handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Request used a method other than POST or OPTIONS
    MethodNotAllowed,
    /// Request body carried no usable authorization code
    MissingRequiredField,
    /// Client credentials are not configured on the server
    ConfigMissing,
    /// The call to Strava failed before a JSON answer was obtained
    ExternalServiceError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingRequiredField => StatusCode::BAD_REQUEST,
            Self::ConfigMissing | Self::ExternalServiceError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the operator-facing description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "The HTTP method is not supported by this endpoint",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ExternalServiceError => "An external service encountered an error",
        }
    }
}

/// Unified error type for the token exchange handler
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Client-facing message, rendered as the `error` field
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Method other than POST or OPTIONS
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::new(
            ErrorCode::MethodNotAllowed,
            error_messages::METHOD_NOT_ALLOWED,
        )
    }

    /// Request body had no truthy `code`
    #[must_use]
    pub fn missing_authorization_code() -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            error_messages::MISSING_AUTHORIZATION_CODE,
        )
    }

    /// Strava client credentials are not configured
    #[must_use]
    pub fn server_configuration() -> Self {
        Self::new(
            ErrorCode::ConfigMissing,
            error_messages::SERVER_CONFIGURATION_ERROR,
        )
    }

    /// Transport or parse failure during the token exchange
    #[must_use]
    pub fn token_exchange_failed(source: ExchangeError) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            error_messages::FAILED_TO_EXCHANGE_TOKEN,
        )
        .with_source(source)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for handler operations
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Client-facing message
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.http_status(), Json(ErrorResponse::from(&self))).into_response()
    }
}

/// Failure talking to the Strava token endpoint
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The request could not be sent or the response could not be read
    #[error("token endpoint request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The token endpoint answered with a body that is not JSON
    #[error("token endpoint returned a non-JSON body (status {status}): {source}")]
    InvalidResponse {
        /// Status the endpoint answered with
        status: StatusCode,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(
            ErrorCode::MethodNotAllowed.http_status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ErrorCode::MissingRequiredField.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::ConfigMissing.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::ExternalServiceError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_carries_only_message() {
        let error = AppError::missing_authorization_code();
        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "Missing authorization code" })
        );
    }

    #[test]
    fn test_token_exchange_failed_keeps_source() {
        let parse_error = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = AppError::token_exchange_failed(ExchangeError::InvalidResponse {
            status: StatusCode::BAD_GATEWAY,
            source: parse_error,
        });

        assert_eq!(error.code, ErrorCode::ExternalServiceError);
        assert_eq!(error.message, "Failed to exchange token");
        let source = std::error::Error::source(&error).unwrap();
        assert!(source.to_string().contains("502"));
    }

    #[tokio::test]
    async fn test_into_response_status_and_body() {
        let response = AppError::method_not_allowed().into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Method not allowed" }));
    }
}
