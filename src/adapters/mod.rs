//! Adapters - Implementations of port interfaces and the HTTP surface.
//!
//! - `http` - Axum routes, handlers, and DTOs for the inbound API
//! - `downstream` - reqwest-backed `ClaimsBackend` implementation

pub mod downstream;
pub mod http;
