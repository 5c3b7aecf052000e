//! Downstream service adapters.

mod http_claims_backend;

pub use http_claims_backend::HttpClaimsBackend;
