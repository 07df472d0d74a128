//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session store implementations (in-memory)
//! - `http` - REST endpoints for telemetry ingestion

pub mod http;
pub mod storage;

pub use self::http::{app_router, TelemetryAppState};
pub use storage::InMemorySessionStore;
