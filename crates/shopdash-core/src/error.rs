// ── Core error types ──
//
// User-facing errors from shopdash-core. These are NOT API-specific --
// consumers never see raw HTTP failures or JSON parse errors directly.
// The `From<shopdash_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the API at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Customer not found: {id}")]
    CustomerNotFound { id: u64 },

    #[error("Order not found: {id}")]
    OrderNotFound { id: u64 },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<shopdash_api::Error> for CoreError {
    fn from(err: shopdash_api::Error) -> Self {
        match err {
            shopdash_api::Error::Transport(e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            shopdash_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            shopdash_api::Error::NotFound {
                resource: "order",
                id,
            } => CoreError::OrderNotFound { id },
            shopdash_api::Error::NotFound { id, .. } => CoreError::CustomerNotFound { id },
            shopdash_api::Error::Server { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            shopdash_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
