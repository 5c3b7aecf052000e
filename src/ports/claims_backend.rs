//! ClaimsBackend port - executes translated REST calls.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::convert::RestCall;

/// Errors surfaced by a [`ClaimsBackend`] implementation.
///
/// The downstream status and body are preserved verbatim so the caller can
/// report them; they are never masked as success.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// The request never completed (connection refused, timeout, DNS).
    #[error("Downstream request failed: {message}")]
    Transport { message: String },

    /// The downstream service answered with a non-2xx status.
    #[error("Downstream service returned {status}: {body}")]
    ErrorStatus { status: u16, body: String },
}

/// Port for the downstream claims-processing service.
///
/// Implementations perform exactly one HTTP call per invocation: no retries,
/// no caching. A 2xx response yields the response body parsed as JSON;
/// anything else is a [`BackendError`].
#[async_trait]
pub trait ClaimsBackend: Send + Sync {
    async fn execute(&self, call: &RestCall) -> Result<Value, BackendError>;
}
