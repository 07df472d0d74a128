//! In-Memory Session Store Adapter
//!
//! Keeps every active session record in a sharded concurrent map.
//! Records live only as long as the process; there is no persistence.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::domain::foundation::{SessionId, ValidationError};
use crate::domain::telemetry::{EventAggregator, IncomingEvent, SessionRecord};
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory store for active session records
///
/// Each `upsert` runs its read-merge-write under the map's entry guard for
/// that key, so merges on one session are serialized while sessions in other
/// shards proceed in parallel. The guard is never held across an await point.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    records: Arc<DashMap<SessionId, SessionRecord>>,
}

impl InMemorySessionStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn apply(
        &self,
        session_id: &SessionId,
        event: &IncomingEvent,
    ) -> Result<SessionRecord, SessionStoreError> {
        if &event.session_id != session_id {
            return Err(ValidationError::invalid_format(
                "sessionId",
                format!(
                    "event for '{}' cannot be merged into '{}'",
                    event.session_id, session_id
                ),
            )
            .into());
        }

        // The entry guard holds the shard lock; it is released before logging.
        let (outcome, existed) = match self.records.entry(session_id.clone()) {
            Entry::Occupied(mut entry) => {
                let outcome = EventAggregator::merge(Some(entry.get()), event);
                if outcome.complete {
                    entry.remove();
                } else {
                    entry.insert(outcome.record.clone());
                }
                (outcome, true)
            }
            Entry::Vacant(entry) => {
                let outcome = EventAggregator::merge(None, event);
                if !outcome.complete {
                    entry.insert(outcome.record.clone());
                }
                (outcome, false)
            }
        };

        match (outcome.complete, existed) {
            (true, true) => tracing::info!(
                session_id = %session_id,
                "Session completed, record evicted"
            ),
            (true, false) => tracing::info!(
                session_id = %session_id,
                "Session completed on first event"
            ),
            (false, true) => tracing::debug!(
                session_id = %session_id,
                kind = %event.kind(),
                "Merged event into existing session"
            ),
            (false, false) => tracing::debug!(
                session_id = %session_id,
                kind = %event.kind(),
                "Started new session"
            ),
        }

        Ok(outcome.record)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn upsert(
        &self,
        session_id: &SessionId,
        event: &IncomingEvent,
    ) -> Result<SessionRecord, SessionStoreError> {
        self.apply(session_id, event)
    }

    async fn get(&self, session_id: &SessionId) -> Result<SessionRecord, SessionStoreError> {
        self.records
            .get(session_id)
            .map(|record| record.value().clone())
            .ok_or_else(|| SessionStoreError::NotFound(session_id.clone()))
    }

    async fn active_sessions(&self) -> usize {
        self.records.len()
    }
}
