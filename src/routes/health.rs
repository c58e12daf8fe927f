// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness always answers; readiness reports whether Strava credentials are configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check routes for service monitoring

use crate::constants::{routes, service_names};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    ///
    /// `/ready` answers 503 while the token route cannot exchange codes
    /// because the client credentials are missing.
    pub fn routes(credentials_configured: bool) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::health_handler))
            .route(routes::READY, get(Self::ready_handler))
            .with_state(credentials_configured)
    }

    async fn health_handler() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::STRAVA_TOKEN_PROXY,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready_handler(State(credentials_configured): State<bool>) -> (StatusCode, Json<Value>) {
        let (status, label) = if credentials_configured {
            (StatusCode::OK, "ready")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
        };

        (
            status,
            Json(json!({
                "status": label,
                "strava_credentials": if credentials_configured { "configured" } else { "missing" },
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
        )
    }
}
