//! Error types for the conversion pipeline.

use thiserror::Error;

use crate::ports::BackendError;

/// Errors that can occur while converting a GraphQL request to a REST call
/// and back.
///
/// Every variant carries a human-readable message; the HTTP adapter renders
/// whichever variant reaches it as a GraphQL error envelope, never as a raw
/// stack trace.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The request body carried no `query` string.
    #[error("No GraphQL query provided")]
    MissingQuery,

    /// The `query` string failed to parse, or parsed to a document with no
    /// usable selection.
    #[error("Invalid GraphQL query")]
    InvalidQuery,

    /// The operation name is not present in the operation mapping table.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A path template referenced a variable the request did not supply.
    #[error("Operation '{operation}' requires variable '{variable}'")]
    MissingVariable {
        operation: String,
        variable: &'static str,
    },

    /// The downstream REST call failed (transport error or non-2xx status).
    #[error(transparent)]
    Downstream(#[from] BackendError),

    /// The operation name is not present in the response mapping table.
    /// Guarded defensively; cannot occur if the request stage succeeded.
    #[error("Unsupported operation for response: {0}")]
    UnsupportedResponseOperation(String),
}

impl ConvertError {
    /// Whether this error was caused by the client's request rather than by
    /// the gateway or the downstream service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ConvertError::MissingQuery
                | ConvertError::InvalidQuery
                | ConvertError::UnsupportedOperation(_)
                | ConvertError::MissingVariable { .. }
        )
    }
}
