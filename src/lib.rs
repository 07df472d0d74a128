//! Session Telemetry - Per-session aggregation of client telemetry events
//!
//! Browser clients report partial events (copy/paste, window resize, form
//! completion time) tagged with a session id. This crate folds them into one
//! record per session and evicts the record when the form is completed.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
