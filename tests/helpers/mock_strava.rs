// ABOUTME: Mock Strava token endpoint built on wiremock
// ABOUTME: Provides router state wired to the mock server with test credentials

use std::sync::Arc;
use strava_token_proxy::config::StravaCredentials;
use strava_token_proxy::oauth2_client::StravaTokenClient;
use strava_token_proxy::routes::TokenExchangeState;
use strava_token_proxy::utils::http_client::oauth_client;
use wiremock::MockServer;

/// Path the mock server serves the token endpoint on
pub const TOKEN_PATH: &str = "/oauth/token";

/// Client id used throughout the tests
pub const CLIENT_ID: &str = "12345";

/// Client secret used throughout the tests
pub const CLIENT_SECRET: &str = "test-client-secret-value";

/// Test credentials
pub fn credentials() -> StravaCredentials {
    StravaCredentials::new(CLIENT_ID, CLIENT_SECRET).unwrap()
}

/// Full token URL on the mock server
pub fn token_url(server: &MockServer) -> String {
    format!("{}{TOKEN_PATH}", server.uri())
}

/// Token route state posting to the mock server
pub fn state_for(server: &MockServer, credentials: Option<StravaCredentials>) -> TokenExchangeState {
    let exchanger = StravaTokenClient::new(oauth_client(None), token_url(server));
    TokenExchangeState::new(credentials, Arc::new(exchanger))
}
