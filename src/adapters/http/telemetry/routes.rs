//! Axum router configuration for telemetry endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_session, health, record_event, TelemetryAppState};

/// Create the telemetry API router.
///
/// # Routes
///
/// - `POST /` - Ingest one event (path used by the browser snippet)
/// - `POST /api/events` - Ingest one event
/// - `GET /api/sessions/:session_id` - Current record of an active session
/// - `GET /health` - Liveness check
pub fn telemetry_routes() -> Router<TelemetryAppState> {
    Router::new()
        .route("/", post(record_event))
        .route("/api/events", post(record_event))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/health", get(health))
}
