// ABOUTME: HTTP client construction for outbound OAuth calls
// ABOUTME: Builds the reqwest client shared by all token exchanges of one server instance

use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::warn;

/// Create the HTTP client used for OAuth token exchanges
///
/// No request timeout is applied unless one is configured, so a slow provider
/// holds the exchange open until the hosting environment gives up.
///
/// # Returns
/// A new `reqwest::Client`; falls back to the default client, without the
/// timeout, if the builder fails
#[must_use]
pub fn oauth_client(timeout: Option<Duration>) -> Client {
    create_custom_client(|builder| match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    })
}

/// Create a new HTTP client with custom configuration
///
/// # Arguments
/// * `config_fn` - Function to configure the `ClientBuilder`
pub fn create_custom_client<F>(config_fn: F) -> Client
where
    F: FnOnce(ClientBuilder) -> ClientBuilder,
{
    let builder = ClientBuilder::new();
    config_fn(builder).build().unwrap_or_else(|e| {
        warn!("Failed to build configured HTTP client, using defaults: {e}");
        Client::new()
    })
}
