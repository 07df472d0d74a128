//! Session Store Port - Interface for the live per-session records.
//!
//! The store owns every in-flight `SessionRecord`. Callers only ever see
//! snapshots: owned copies taken inside the store's critical section.

use async_trait::async_trait;

use crate::domain::foundation::{SessionId, ValidationError};
use crate::domain::telemetry::{IncomingEvent, SessionRecord};

/// Errors that can occur during session store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("No active session: {0}")]
    NotFound(SessionId),

    #[error("Invalid event: {0}")]
    Validation(#[from] ValidationError),
}

/// Port for the keyed store of active session records
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fold an event into the session's record
    ///
    /// Reads the current record (absence means a new session), merges the
    /// event, then writes the result back or, if the event completed the
    /// session, removes the entry. The whole sequence is atomic with respect
    /// to other operations on the same `session_id`.
    ///
    /// # Arguments
    /// * `session_id` - The key to merge into
    /// * `event` - A validated event belonging to `session_id`
    ///
    /// # Returns
    /// A snapshot of the record after the merge
    ///
    /// # Errors
    /// Returns `SessionStoreError::Validation` if the event belongs to a
    /// different session; no record is touched in that case
    async fn upsert(
        &self,
        session_id: &SessionId,
        event: &IncomingEvent,
    ) -> Result<SessionRecord, SessionStoreError>;

    /// Look up the active record for a session
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no record is active
    async fn get(&self, session_id: &SessionId) -> Result<SessionRecord, SessionStoreError>;

    /// Number of sessions currently holding a record
    async fn active_sessions(&self) -> usize;
}
