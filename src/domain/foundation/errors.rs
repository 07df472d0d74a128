//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while turning untrusted input into domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' is required for '{kind}' events")]
    MissingField { field: String, kind: String },

    #[error("Unknown event type: '{0}'")]
    UnknownEventKind(String),

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a missing field error for a given event kind.
    pub fn missing_field(field: impl Into<String>, kind: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
            kind: kind.into(),
        }
    }

    /// Creates an unknown event kind error.
    pub fn unknown_event_kind(kind: impl Into<String>) -> Self {
        ValidationError::UnknownEventKind(kind.into())
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::MissingField { .. } => ErrorCode::MissingField,
            ValidationError::UnknownEventKind(_) => ErrorCode::UnknownEventKind,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    MissingField,
    UnknownEventKind,
    InvalidFormat,

    // Request body errors
    MalformedJson,
    UnsupportedMediaType,
    InvalidBody,

    // Not found errors
    SessionNotFound,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::UnknownEventKind => "UNKNOWN_EVENT_TYPE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::MalformedJson => "MALFORMED_JSON",
            ErrorCode::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            ErrorCode::InvalidBody => "INVALID_BODY",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
        };
        write!(f, "{}", s)
    }
}
