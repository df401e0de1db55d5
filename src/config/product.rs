//! Product catalog client configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for the upstream product catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductServiceConfig {
    /// Base URL of the catalog, e.g. `http://localhost:8000`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ProductServiceConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidProductServiceUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidProductServiceTimeout);
        }
        Ok(())
    }
}

impl Default for ProductServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    10
}
