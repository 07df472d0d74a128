//! Event Aggregator - folds one incoming event into a session record.
//!
//! Pure domain service: no I/O, no shared state. The store calls it inside its
//! per-session critical section and decides what to do with the outcome.

use super::event::{EventPayload, IncomingEvent};
use super::record::SessionRecord;

/// Result of merging one event into a session record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The record after the merge.
    pub record: SessionRecord,
    /// True when the event finalized the session.
    pub complete: bool,
}

/// Merge rules for session telemetry.
pub struct EventAggregator;

impl EventAggregator {
    /// Merges `event` into `existing`, producing the next record.
    ///
    /// `existing` is only read; the returned record is a new value. A missing
    /// record starts empty, taking its identity from the event.
    pub fn merge(existing: Option<&SessionRecord>, event: &IncomingEvent) -> MergeOutcome {
        let mut record = match existing {
            Some(record) => record.clone(),
            None => SessionRecord::new(event.session_id.clone(), event.website_url.clone()),
        };
        record.set_origin(&event.session_id, &event.website_url);

        match &event.payload {
            EventPayload::CopyPaste { form_id, pasted } => {
                record.record_copy_paste(form_id, *pasted);
            }
            EventPayload::Resize { from, to } => {
                record.record_resize(from, to);
            }
            EventPayload::FormCompleted { time_taken_seconds } => {
                record.complete(*time_taken_seconds);
            }
        }

        MergeOutcome {
            record,
            complete: event.kind().is_terminal(),
        }
    }
}
