//! HTTP adapter for telemetry endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DimensionDto, ErrorResponse, EventRequest, HealthResponse, SessionRecordResponse,
};
pub use handlers::TelemetryAppState;
pub use routes::telemetry_routes;
