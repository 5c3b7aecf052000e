//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! conversion logic and the outside world. Adapters implement these ports.
//!
//! - `ClaimsBackend` - Port for executing translated REST calls against the
//!   downstream claims-processing service

mod claims_backend;

pub use claims_backend::{BackendError, ClaimsBackend};
