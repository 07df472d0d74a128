//! SessionStatus enum for tracking the lifecycle of a telemetry session.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an aggregated session record.
///
/// A record only ever moves from `Active` to `Completed`; completed records
/// are evicted, so the store never holds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Active,
    Completed,
}
