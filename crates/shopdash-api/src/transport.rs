// Shared transport configuration for building reqwest::Client instances.
//
// The API enforces no timeouts of its own; a hung request is bounded
// only by the client-side timeout configured here.

use std::time::Duration;

/// Transport configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        Ok(reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("shopdash/", env!("CARGO_PKG_VERSION")))
            .build()?)
    }
}
