//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `SessionStore` - Keyed store of in-flight session records

mod session_store;

pub use session_store::{SessionStore, SessionStoreError};
