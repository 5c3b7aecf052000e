//! HTTP adapter for the conversion endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorEnvelope, GraphqlError, GraphqlRequestBody};
pub use handlers::ConvertAppState;
pub use routes::gateway_router;
