// ABOUTME: HTTP server assembly and lifecycle for the token proxy
// ABOUTME: Builds the axum router with CORS and tracing layers and serves it until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::ServerConfig;
use crate::middleware::with_cors_headers;
use crate::routes::{HealthRoutes, TokenExchangeState, TokenRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the complete application router
pub fn build_router(state: TokenExchangeState) -> Router {
    let credentials_configured = state.has_credentials();
    let router = Router::new()
        .merge(TokenRoutes::routes(state))
        .merge(HealthRoutes::routes(credentials_configured));

    with_cors_headers(router).layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.http_port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.http_port))?;

    serve_on(listener, TokenExchangeState::from_config(config), shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections
pub async fn serve_on<F>(listener: TcpListener, state: TokenExchangeState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("Token exchange endpoint: POST http://{addr}/api/strava/token");
    info!("Health check:            GET  http://{addr}/health");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down server");
}
