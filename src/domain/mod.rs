//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, status enums, errors)
//! - `telemetry` - Incoming events, session records, and merge rules

pub mod foundation;
pub mod telemetry;
