//! Incoming telemetry events.
//!
//! An `IncomingEvent` is the validated form of one client report. The payload
//! is a closed set of variants, so anything that reaches the aggregator has
//! already been checked at the boundary.

use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{SessionId, ValidationError};

/// Width/height pair reported by the browser.
///
/// Both components are kept verbatim; the service never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    pub width: String,
    pub height: String,
}

impl Dimension {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }
}

/// The three event kinds a client may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CopyPaste,
    Resize,
    FormCompleted,
}

impl EventKind {
    /// Name used for this kind on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::CopyPaste => "copyAndPaste",
            EventKind::Resize => "screenResize",
            EventKind::FormCompleted => "timeTaken",
        }
    }

    /// Returns true if this kind finalizes its session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, EventKind::FormCompleted)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "copyAndPaste" => Ok(EventKind::CopyPaste),
            "screenResize" => Ok(EventKind::Resize),
            "timeTaken" => Ok(EventKind::FormCompleted),
            other => Err(ValidationError::unknown_event_kind(other)),
        }
    }
}

/// Kind-specific data carried by an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    /// A paste (or the absence of one) was observed in a form.
    CopyPaste { form_id: String, pasted: bool },
    /// The browser window changed size.
    Resize { from: Dimension, to: Dimension },
    /// The form was submitted; terminates the session.
    FormCompleted { time_taken_seconds: u64 },
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::CopyPaste { .. } => EventKind::CopyPaste,
            EventPayload::Resize { .. } => EventKind::Resize,
            EventPayload::FormCompleted { .. } => EventKind::FormCompleted,
        }
    }
}

/// One validated client-reported occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingEvent {
    pub session_id: SessionId,
    pub website_url: String,
    pub payload: EventPayload,
}

impl IncomingEvent {
    pub fn new(session_id: SessionId, website_url: impl Into<String>, payload: EventPayload) -> Self {
        Self {
            session_id,
            website_url: website_url.into(),
            payload,
        }
    }

    /// Convenience constructor for a copy/paste event.
    pub fn copy_paste(
        session_id: SessionId,
        website_url: impl Into<String>,
        form_id: impl Into<String>,
        pasted: bool,
    ) -> Self {
        Self::new(
            session_id,
            website_url,
            EventPayload::CopyPaste {
                form_id: form_id.into(),
                pasted,
            },
        )
    }

    /// Convenience constructor for a resize event.
    pub fn resize(
        session_id: SessionId,
        website_url: impl Into<String>,
        from: Dimension,
        to: Dimension,
    ) -> Self {
        Self::new(session_id, website_url, EventPayload::Resize { from, to })
    }

    /// Convenience constructor for a form completion event.
    pub fn form_completed(
        session_id: SessionId,
        website_url: impl Into<String>,
        time_taken_seconds: u64,
    ) -> Self {
        Self::new(
            session_id,
            website_url,
            EventPayload::FormCompleted { time_taken_seconds },
        )
    }

    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_parses_wire_names() {
        assert_eq!("copyAndPaste".parse::<EventKind>(), Ok(EventKind::CopyPaste));
        assert_eq!("screenResize".parse::<EventKind>(), Ok(EventKind::Resize));
        assert_eq!("timeTaken".parse::<EventKind>(), Ok(EventKind::FormCompleted));
    }

    #[test]
    fn event_kind_rejects_unknown_names() {
        assert_eq!(
            "custom".parse::<EventKind>(),
            Err(ValidationError::unknown_event_kind("custom"))
        );
        // Wire names are case sensitive.
        assert!("CopyAndPaste".parse::<EventKind>().is_err());
        assert!("".parse::<EventKind>().is_err());
    }

    #[test]
    fn event_kind_display_matches_wire_name() {
        for kind in [EventKind::CopyPaste, EventKind::Resize, EventKind::FormCompleted] {
            assert_eq!(kind.to_string().parse::<EventKind>(), Ok(kind));
        }
    }

    #[test]
    fn only_form_completed_is_terminal() {
        assert!(!EventKind::CopyPaste.is_terminal());
        assert!(!EventKind::Resize.is_terminal());
        assert!(EventKind::FormCompleted.is_terminal());
    }

    #[test]
    fn payload_reports_its_kind() {
        let sid = SessionId::new("s1").unwrap();
        let event = IncomingEvent::copy_paste(sid.clone(), "https://x", "f1", true);
        assert_eq!(event.kind(), EventKind::CopyPaste);

        let event = IncomingEvent::resize(
            sid.clone(),
            "https://x",
            Dimension::new("10", "10"),
            Dimension::new("5", "5"),
        );
        assert_eq!(event.kind(), EventKind::Resize);

        let event = IncomingEvent::form_completed(sid, "https://x", 42);
        assert_eq!(event.kind(), EventKind::FormCompleted);
    }

    #[test]
    fn dimension_keeps_components_verbatim() {
        let dim = Dimension::new("100%", "auto");
        assert_eq!(dim.width, "100%");
        assert_eq!(dim.height, "auto");
    }
}
