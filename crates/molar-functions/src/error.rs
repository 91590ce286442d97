//! Remote function error types.

use thiserror::Error;

/// Errors that can occur when invoking a hosted function.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// HTTP transport error (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The function returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the function.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The function endpoint or key is missing from configuration.
    #[error("functions not configured: {0}")]
    NotConfigured(String),

    /// The function returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
