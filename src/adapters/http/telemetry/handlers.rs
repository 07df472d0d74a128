//! HTTP handlers for telemetry endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::telemetry::{
    GetSessionRecordHandler, GetSessionRecordQuery, RecordEventCommand, RecordEventHandler,
};
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::telemetry::{IncomingEvent, TelemetryError};
use crate::ports::SessionStore;

use super::dto::{ErrorResponse, EventRequest, HealthResponse, SessionRecordResponse};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for the telemetry endpoints.
///
/// Cloned per request; the store itself is shared behind the `Arc`.
#[derive(Clone)]
pub struct TelemetryAppState {
    pub store: Arc<dyn SessionStore>,
}

impl TelemetryAppState {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn record_event_handler(&self) -> RecordEventHandler {
        RecordEventHandler::new(self.store.clone())
    }

    pub fn get_session_record_handler(&self) -> GetSessionRecordHandler {
        GetSessionRecordHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST / and POST /api/events - Fold one event into its session
pub async fn record_event(
    State(state): State<TelemetryAppState>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return handle_json_rejection(rejection),
    };

    let event = match IncomingEvent::try_from(req) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Rejected telemetry event: {}", e);
            return handle_telemetry_error(TelemetryError::validation(e));
        }
    };

    match state
        .record_event_handler()
        .handle(RecordEventCommand { event })
        .await
    {
        Ok(record) => {
            let response: SessionRecordResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_telemetry_error(e),
    }
}

/// GET /api/sessions/:session_id - Current record of an active session
pub async fn get_session(
    State(state): State<TelemetryAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match SessionId::new(session_id) {
        Ok(id) => id,
        Err(e) => return handle_telemetry_error(TelemetryError::validation(e)),
    };

    match state
        .get_session_record_handler()
        .handle(GetSessionRecordQuery { session_id })
        .await
    {
        Ok(record) => {
            let response: SessionRecordResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_telemetry_error(e),
    }
}

/// GET /health - Liveness check
pub async fn health(State(state): State<TelemetryAppState>) -> Response {
    let response = HealthResponse {
        status: "ok".to_string(),
        active_sessions: state.store.active_sessions().await,
    };
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_json_rejection(rejection: JsonRejection) -> Response {
    tracing::debug!("Malformed event body: {}", rejection.body_text());
    let (status, code) = match &rejection {
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
            (StatusCode::BAD_REQUEST, ErrorCode::MalformedJson)
        }
        JsonRejection::MissingJsonContentType(_) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ErrorCode::UnsupportedMediaType,
        ),
        _ => (rejection.status(), ErrorCode::InvalidBody),
    };
    (
        status,
        Json(ErrorResponse::new(
            code.to_string(),
            format!("Error parsing the JSON: {}", rejection.body_text()),
        )),
    )
        .into_response()
}

fn handle_telemetry_error(error: TelemetryError) -> Response {
    let status = match &error {
        TelemetryError::NotFound(_) => StatusCode::NOT_FOUND,
        TelemetryError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse::new(error.code().to_string(), error.message())),
    )
        .into_response()
}
