//! Route configuration for the gateway endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{convert_graphql_to_rest, health, ConvertAppState};

/// Creates the gateway router.
///
/// Routes:
/// - `POST /convert/graphql-to-rest` - GraphQL to REST conversion pipeline
/// - `GET /health` - liveness probe
pub fn gateway_router() -> Router<ConvertAppState> {
    Router::new()
        .route("/convert/graphql-to-rest", post(convert_graphql_to_rest))
        .route("/health", get(health))
}
