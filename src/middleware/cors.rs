// ABOUTME: CORS header middleware for the token exchange endpoint
// ABOUTME: Stamps permissive cross-origin headers onto every response, errors included
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::cors;
use axum::Router;
use http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Apply the cross-origin headers to every response produced by `router`
///
/// A browser application on any origin may call the proxy. The headers are
/// set unconditionally rather than negotiated per request, so they also appear
/// on 4xx/5xx answers and on requests without an `Origin` header.
pub fn with_cors_headers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(cors::ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(cors::ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(cors::ALLOW_HEADERS),
        ))
}
