//! Downstream claims-processing service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the downstream claims-processing REST service.
#[derive(Debug, Clone, Deserialize)]
pub struct DownstreamConfig {
    /// Base URL of the claims-processing service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Outbound request timeout in seconds. Bounds the only blocking
    /// operation in the pipeline; there are no retries.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl DownstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate downstream configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidDownstreamUrl);
        }
        if self.base_url.ends_with('/') {
            return Err(ValidationError::TrailingSlashInDownstreamUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidDownstreamTimeout);
        }
        Ok(())
    }
}

impl Default for DownstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://claims-processing:8000".to_string()
}

fn default_timeout() -> u64 {
    5
}
