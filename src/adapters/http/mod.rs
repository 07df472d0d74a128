//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the telemetry routes with the cross-cutting layers
//! (request tracing, timeout, CORS) configured from `ServerConfig`.

pub mod telemetry;

use std::time::Duration;

use axum::Router;
use ::http::{header, HeaderName, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use telemetry::telemetry_routes;
pub use telemetry::TelemetryAppState;

/// Build the complete application router.
pub fn app_router(state: TelemetryAppState, server: &ServerConfig) -> Router {
    telemetry_routes().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                server.request_timeout_secs,
            )))
            .layer(cors_layer(server)),
    )
}

/// CORS policy for browser clients.
///
/// Without configured origins any origin may post events.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            header::ACCEPT_ENCODING,
            header::AUTHORIZATION,
            HeaderName::from_static("x-csrf-token"),
        ])
}
