//! Telemetry command and query handlers.

mod get_session_record;
mod record_event;

pub use get_session_record::{GetSessionRecordHandler, GetSessionRecordQuery};
pub use record_event::{RecordEventCommand, RecordEventHandler};
