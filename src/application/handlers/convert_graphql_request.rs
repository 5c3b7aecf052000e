//! ConvertGraphqlRequestHandler - end-to-end conversion pipeline.
//!
//! Sequences the four conversion stages for one inbound request:
//! extract the operation, translate to a REST call, invoke the downstream
//! service, translate the response back. Any stage failure short-circuits
//! the pipeline; there is no retry and no partial result.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::domain::convert::{
    convert_to_graphql_format, extract_operation, response_field, rest_operation, ConvertError,
};
use crate::ports::ClaimsBackend;

/// One inbound GraphQL-style request.
#[derive(Debug, Clone)]
pub struct ConvertGraphqlRequest {
    /// The raw GraphQL query string. Absence is a fatal input error.
    pub query: Option<String>,
    /// The GraphQL variables object. Defaults to an empty object.
    pub variables: Value,
}

/// Handler for converting a GraphQL request into a downstream REST call and
/// shaping the response.
///
/// Stateless between calls; the backend is the only dependency.
pub struct ConvertGraphqlRequestHandler {
    backend: Arc<dyn ClaimsBackend>,
}

impl ConvertGraphqlRequestHandler {
    pub fn new(backend: Arc<dyn ClaimsBackend>) -> Self {
        Self { backend }
    }

    /// Runs the pipeline and returns the GraphQL-shaped success payload
    /// `{"data": {<field>: <payload>}}`.
    pub async fn handle(&self, request: ConvertGraphqlRequest) -> Result<Value, ConvertError> {
        let query = request.query.as_deref().ok_or(ConvertError::MissingQuery)?;

        let operation = extract_operation(query)?;
        let call = rest_operation(&operation, &request.variables)?;

        tracing::debug!(
            operation = %operation,
            method = call.method.as_str(),
            path = %call.path,
            "translated GraphQL operation to REST call"
        );

        let rest_response = self.backend.execute(&call).await?;

        let payload = convert_to_graphql_format(&rest_response);
        let field = response_field(&operation)?;

        Ok(json!({ "data": { field: payload } }))
    }
}
