//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Client-supplied identifier for one telemetry session.
///
/// Opaque to the service: it is never parsed, only compared. The only
/// constraint is that it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("sessionId"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SessionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_accepts_any_non_empty_string() {
        let id = SessionId::new("a1b2-c3").unwrap();
        assert_eq!(id.as_str(), "a1b2-c3");
        assert_eq!(id.to_string(), "a1b2-c3");
    }

    #[test]
    fn session_id_rejects_empty_string() {
        let result = SessionId::new("");
        assert_eq!(result, Err(ValidationError::empty_field("sessionId")));
    }

    #[test]
    fn session_id_parses_from_str() {
        let id: SessionId = "s1".parse().unwrap();
        assert_eq!(id, SessionId::new("s1").unwrap());
        assert!("".parse::<SessionId>().is_err());
    }

    #[test]
    fn session_id_serializes_transparently() {
        let id = SessionId::new("s1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"s1\"");

        let parsed: SessionId = serde_json::from_str("\"s1\"").unwrap();
        assert_eq!(parsed, id);
        assert!(serde_json::from_str::<SessionId>("\"\"").is_err());
    }
}
