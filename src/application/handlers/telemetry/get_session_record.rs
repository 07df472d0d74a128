//! GetSessionRecordHandler - Query handler for an active session's record.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::telemetry::{SessionRecord, TelemetryError};
use crate::ports::SessionStore;

/// Query to get the current record of a session.
#[derive(Debug, Clone)]
pub struct GetSessionRecordQuery {
    pub session_id: SessionId,
}

/// Handler for reading session records.
pub struct GetSessionRecordHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionRecordHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSessionRecordQuery) -> Result<SessionRecord, TelemetryError> {
        Ok(self.store.get(&query.session_id).await?)
    }
}
