//! HTTP DTOs for telemetry endpoints.
//!
//! These types decouple the HTTP API from domain types. The request shape is
//! the flat JSON object browser clients already send: one `eventType` tag plus
//! whichever fields that kind needs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{SessionId, SessionStatus, ValidationError};
use crate::domain::telemetry::{Dimension, EventKind, EventPayload, IncomingEvent, SessionRecord};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Width/height pair as sent by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionDto {
    #[serde(default)]
    pub width: String,
    #[serde(default)]
    pub height: String,
}

impl From<DimensionDto> for Dimension {
    fn from(dto: DimensionDto) -> Self {
        Dimension::new(dto.width, dto.height)
    }
}

impl From<&Dimension> for DimensionDto {
    fn from(dim: &Dimension) -> Self {
        Self {
            width: dim.width.clone(),
            height: dim.height.clone(),
        }
    }
}

/// One telemetry event as posted by the client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub form_id: Option<String>,
    #[serde(default)]
    pub pasted: Option<bool>,
    #[serde(default)]
    pub resize_from: Option<DimensionDto>,
    #[serde(default)]
    pub resize_to: Option<DimensionDto>,
    #[serde(default)]
    pub time_taken: Option<i64>,
}

impl TryFrom<EventRequest> for IncomingEvent {
    type Error = ValidationError;

    fn try_from(req: EventRequest) -> Result<Self, Self::Error> {
        let kind: EventKind = req.event_type.parse()?;
        let session_id = SessionId::new(req.session_id)?;

        let payload = match kind {
            EventKind::CopyPaste => {
                let form_id = req
                    .form_id
                    .ok_or_else(|| ValidationError::missing_field("formId", kind.as_str()))?;
                if form_id.is_empty() {
                    return Err(ValidationError::empty_field("formId"));
                }
                let pasted = req
                    .pasted
                    .ok_or_else(|| ValidationError::missing_field("pasted", kind.as_str()))?;
                EventPayload::CopyPaste { form_id, pasted }
            }
            EventKind::Resize => {
                let from = req
                    .resize_from
                    .ok_or_else(|| ValidationError::missing_field("resizeFrom", kind.as_str()))?;
                let to = req
                    .resize_to
                    .ok_or_else(|| ValidationError::missing_field("resizeTo", kind.as_str()))?;
                EventPayload::Resize {
                    from: from.into(),
                    to: to.into(),
                }
            }
            EventKind::FormCompleted => {
                let time_taken = req
                    .time_taken
                    .ok_or_else(|| ValidationError::missing_field("timeTaken", kind.as_str()))?;
                let time_taken_seconds = u64::try_from(time_taken).map_err(|_| {
                    ValidationError::invalid_format("timeTaken", "must not be negative")
                })?;
                EventPayload::FormCompleted { time_taken_seconds }
            }
        };

        Ok(IncomingEvent::new(session_id, req.website_url, payload))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Snapshot of a session record for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecordResponse {
    pub website_url: String,
    pub session_id: String,
    #[serde(default)]
    pub resize_from: Option<DimensionDto>,
    #[serde(default)]
    pub resize_to: Option<DimensionDto>,
    #[serde(default)]
    pub copy_and_paste: Option<BTreeMap<String, bool>>,
    #[serde(default)]
    pub form_completion_time: Option<u64>,
    pub status: SessionStatus,
}

impl From<SessionRecord> for SessionRecordResponse {
    fn from(record: SessionRecord) -> Self {
        Self {
            website_url: record.website_url().to_string(),
            session_id: record.session_id().to_string(),
            resize_from: record.resize_from().map(DimensionDto::from),
            resize_to: record.resize_to().map(DimensionDto::from),
            copy_and_paste: record.copy_paste_by_form().cloned(),
            form_completion_time: record.form_completion_time_seconds(),
            status: record.status(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub active_sessions: usize,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<IncomingEvent, ValidationError> {
        let req: EventRequest = serde_json::from_str(json).unwrap();
        IncomingEvent::try_from(req)
    }

    #[test]
    fn copy_and_paste_request_converts() {
        let event = parse(
            r#"{"eventType":"copyAndPaste","websiteUrl":"https://x","sessionId":"s1","formId":"inputEmail","pasted":true}"#,
        )
        .unwrap();

        assert_eq!(event.session_id.as_str(), "s1");
        assert_eq!(event.website_url, "https://x");
        assert_eq!(
            event.payload,
            EventPayload::CopyPaste {
                form_id: "inputEmail".to_string(),
                pasted: true
            }
        );
    }

    #[test]
    fn screen_resize_request_keeps_dimensions_verbatim() {
        let event = parse(
            r#"{"eventType":"screenResize","sessionId":"s1","resizeFrom":{"width":"1920","height":"1080"},"resizeTo":{"width":"50%","height":"auto"}}"#,
        )
        .unwrap();

        assert_eq!(
            event.payload,
            EventPayload::Resize {
                from: Dimension::new("1920", "1080"),
                to: Dimension::new("50%", "auto"),
            }
        );
        assert_eq!(event.website_url, "");
    }

    #[test]
    fn time_taken_request_converts() {
        let event = parse(r#"{"eventType":"timeTaken","sessionId":"s1","timeTaken":42}"#).unwrap();
        assert_eq!(
            event.payload,
            EventPayload::FormCompleted {
                time_taken_seconds: 42
            }
        );
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        let err = parse(r#"{"eventType":"custom","sessionId":"s1"}"#).unwrap_err();
        assert_eq!(err, ValidationError::unknown_event_kind("custom"));
    }

    #[test]
    fn missing_event_type_is_rejected() {
        let err = parse(r#"{"sessionId":"s1"}"#).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownEventKind(_)));
    }

    #[test]
    fn empty_session_id_is_rejected() {
        let err = parse(r#"{"eventType":"timeTaken","sessionId":"","timeTaken":1}"#).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("sessionId"));
    }

    #[test]
    fn kind_specific_fields_are_required() {
        let err = parse(r#"{"eventType":"copyAndPaste","sessionId":"s1","pasted":true}"#).unwrap_err();
        assert_eq!(err, ValidationError::missing_field("formId", "copyAndPaste"));

        let err = parse(r#"{"eventType":"copyAndPaste","sessionId":"s1","formId":"f"}"#).unwrap_err();
        assert_eq!(err, ValidationError::missing_field("pasted", "copyAndPaste"));

        let err = parse(
            r#"{"eventType":"screenResize","sessionId":"s1","resizeFrom":{"width":"1","height":"1"}}"#,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::missing_field("resizeTo", "screenResize"));

        let err = parse(r#"{"eventType":"timeTaken","sessionId":"s1"}"#).unwrap_err();
        assert_eq!(err, ValidationError::missing_field("timeTaken", "timeTaken"));
    }

    #[test]
    fn negative_time_taken_is_rejected() {
        let err = parse(r#"{"eventType":"timeTaken","sessionId":"s1","timeTaken":-5}"#).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn record_response_reports_unset_fields_as_null() {
        let record = SessionRecord::new(SessionId::new("s1").unwrap(), "https://x");
        let json = serde_json::to_value(SessionRecordResponse::from(record)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "websiteUrl": "https://x",
                "sessionId": "s1",
                "resizeFrom": null,
                "resizeTo": null,
                "copyAndPaste": null,
                "formCompletionTime": null,
                "status": "active"
            })
        );
    }

    #[test]
    fn wrongly_typed_field_fails_to_decode() {
        let result = serde_json::from_str::<EventRequest>(
            r#"{"eventType":"timeTaken","sessionId":"s1","timeTaken":"42"}"#,
        );
        assert!(result.is_err());
    }
}
