//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod telemetry;

pub use telemetry::{
    GetSessionRecordHandler, GetSessionRecordQuery, RecordEventCommand, RecordEventHandler,
};
