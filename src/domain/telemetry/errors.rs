//! Telemetry-specific error types.

use crate::domain::foundation::{ErrorCode, SessionId, ValidationError};
use crate::ports::SessionStoreError;

/// Errors surfaced to callers of the telemetry handlers.
///
/// Bad input and "no such session" are kept apart so a caller can tell a
/// rejected event from a session that was already finalized or never existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// No active record for the session.
    NotFound(SessionId),
    /// The event was rejected; nothing was stored.
    ValidationFailed(ValidationError),
}

impl TelemetryError {
    pub fn not_found(id: SessionId) -> Self {
        TelemetryError::NotFound(id)
    }
    pub fn validation(error: ValidationError) -> Self {
        TelemetryError::ValidationFailed(error)
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            TelemetryError::NotFound(_) => ErrorCode::SessionNotFound,
            TelemetryError::ValidationFailed(e) => e.code(),
        }
    }
    pub fn message(&self) -> String {
        match self {
            TelemetryError::NotFound(id) => format!("Session not found: {}", id),
            TelemetryError::ValidationFailed(e) => format!("Validation failed: {}", e),
        }
    }
}

impl std::fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TelemetryError {}

impl From<ValidationError> for TelemetryError {
    fn from(err: ValidationError) -> Self {
        TelemetryError::ValidationFailed(err)
    }
}

impl From<SessionStoreError> for TelemetryError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => TelemetryError::NotFound(id),
            SessionStoreError::Validation(e) => TelemetryError::ValidationFailed(e),
        }
    }
}
