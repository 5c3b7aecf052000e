//! HTTP handlers for the conversion endpoint.
//!
//! These handlers connect Axum routes to the application layer pipeline
//! handler and absorb every stage failure into the GraphQL error envelope.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::application::ConvertGraphqlRequestHandler;
use crate::domain::convert::ConvertError;
use crate::ports::ClaimsBackend;

use super::dto::{ErrorEnvelope, GraphqlRequestBody};

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct ConvertAppState {
    pub backend: Arc<dyn ClaimsBackend>,
}

impl ConvertAppState {
    pub fn new(backend: Arc<dyn ClaimsBackend>) -> Self {
        Self { backend }
    }

    pub fn convert_handler(&self) -> ConvertGraphqlRequestHandler {
        ConvertGraphqlRequestHandler::new(self.backend.clone())
    }
}

/// POST /convert/graphql-to-rest - run the conversion pipeline.
pub async fn convert_graphql_to_rest(
    State(state): State<ConvertAppState>,
    Json(body): Json<GraphqlRequestBody>,
) -> impl IntoResponse {
    match state.convert_handler().handle(body.into()).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "conversion pipeline failed");
            let status = status_for(&err);
            (status, Json(ErrorEnvelope::from_message(err.to_string()))).into_response()
        }
    }
}

/// GET /health - liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Maps a pipeline error to the HTTP status of the envelope response.
///
/// Client-caused failures (parse errors, unsupported operations, missing
/// variables) are 400; downstream failures are 502; the response-mapping
/// guard is 500.
fn status_for(err: &ConvertError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else if matches!(err, ConvertError::Downstream(_)) {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
