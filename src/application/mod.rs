//! Application layer - request orchestration.
//!
//! This layer sequences the conversion stages (extract, translate, invoke,
//! translate back) and coordinates between the domain and the ports.

pub mod handlers;

pub use handlers::{ConvertGraphqlRequest, ConvertGraphqlRequestHandler};
