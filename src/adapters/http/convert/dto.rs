//! HTTP DTOs for the conversion endpoint.
//!
//! These types define the JSON request/response structure of the gateway's
//! GraphQL-facing surface. They serve as the boundary between HTTP and the
//! application layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::ConvertGraphqlRequest;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Inbound GraphQL-style request body.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlRequestBody {
    /// The GraphQL query string.
    pub query: Option<String>,
    /// The variables object; defaults to `{}` when absent.
    #[serde(default = "empty_object")]
    pub variables: Value,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl From<GraphqlRequestBody> for ConvertGraphqlRequest {
    fn from(body: GraphqlRequestBody) -> Self {
        Self {
            query: body.query,
            variables: body.variables,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One entry in the GraphQL `errors` array.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlError {
    /// Human-readable error message.
    pub message: String,
    /// Always empty; the gateway does not track source locations.
    pub locations: Vec<Value>,
    /// Always empty; the gateway does not track response paths.
    pub path: Vec<Value>,
}

/// GraphQL error envelope: `{"errors": [...], "data": null}`.
///
/// Every pipeline failure is rendered as this shape; callers never see a
/// raw error or stack trace.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<GraphqlError>,
    pub data: Value,
}

impl ErrorEnvelope {
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            errors: vec![GraphqlError {
                message: message.into(),
                locations: vec![],
                path: vec![],
            }],
            data: Value::Null,
        }
    }
}
