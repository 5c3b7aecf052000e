//! HttpClaimsBackend - reqwest implementation of the `ClaimsBackend` port.
//!
//! Performs exactly one HTTP call per invocation against the configured
//! claims-processing base URL. The client timeout bounds the call; there are
//! no retries and no caching. Downstream status and body are propagated
//! verbatim on failure.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::DownstreamConfig;
use crate::domain::convert::{RestCall, RestMethod};
use crate::ports::{BackendError, ClaimsBackend};

/// reqwest-backed claims-processing client.
pub struct HttpClaimsBackend {
    client: Client,
    base_url: String,
}

impl HttpClaimsBackend {
    /// Creates a backend from the downstream configuration.
    pub fn new(config: &DownstreamConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl ClaimsBackend for HttpClaimsBackend {
    async fn execute(&self, call: &RestCall) -> Result<Value, BackendError> {
        let url = format!("{}{}", self.base_url, call.path);

        tracing::debug!(method = call.method.as_str(), url = %url, "calling downstream service");

        let request = match call.method {
            RestMethod::Get => self.client.get(&url),
            RestMethod::Post => {
                let request = self.client.post(&url);
                match &call.body {
                    Some(body) => request.json(body),
                    None => request,
                }
            }
        };

        let response = request.send().await.map_err(|err| BackendError::Transport {
            message: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "downstream service returned an error");
            return Err(BackendError::ErrorStatus {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(|err| BackendError::Transport {
            message: format!("invalid JSON in downstream response: {err}"),
        })
    }
}
