//! Telemetry domain module.
//!
//! Client telemetry arrives as partial events keyed by session. Each event is
//! folded into a single `SessionRecord` until the form-completion event ends
//! the session.
//!
//! - `event` - validated incoming events and their payloads
//! - `record` - the accumulated per-session state
//! - `aggregator` - pure merge rules
//! - `errors` - errors surfaced to callers

mod aggregator;
mod errors;
mod event;
mod record;

pub use aggregator::{EventAggregator, MergeOutcome};
pub use errors::TelemetryError;
pub use event::{Dimension, EventKind, EventPayload, IncomingEvent};
pub use record::SessionRecord;
