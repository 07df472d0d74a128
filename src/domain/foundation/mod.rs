//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, status enums, and error types
//! that form the vocabulary of the telemetry domain.

mod errors;
mod ids;
mod session_status;

pub use errors::{ErrorCode, ValidationError};
pub use ids::SessionId;
pub use session_status::SessionStatus;
