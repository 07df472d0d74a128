//! RecordEventHandler - Command handler for ingesting one telemetry event.

use std::sync::Arc;

use crate::domain::telemetry::{IncomingEvent, SessionRecord, TelemetryError};
use crate::ports::SessionStore;

/// Command to fold one event into its session.
#[derive(Debug, Clone)]
pub struct RecordEventCommand {
    pub event: IncomingEvent,
}

/// Handler for recording events.
pub struct RecordEventHandler {
    store: Arc<dyn SessionStore>,
}

impl RecordEventHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the session snapshot after the merge. A completed snapshot means
    /// the session was evicted.
    pub async fn handle(&self, cmd: RecordEventCommand) -> Result<SessionRecord, TelemetryError> {
        let event = cmd.event;
        let kind = event.kind();

        let record = self
            .store
            .upsert(&event.session_id, &event)
            .await
            .map_err(|e| {
                tracing::warn!(
                    session_id = %event.session_id,
                    kind = %kind,
                    "Event rejected: {}",
                    e
                );
                TelemetryError::from(e)
            })?;

        if record.is_complete() {
            tracing::info!(
                session_id = %event.session_id,
                website_url = %event.website_url,
                time_taken_seconds = ?record.form_completion_time_seconds(),
                "Form completed"
            );
        }

        Ok(record)
    }
}
