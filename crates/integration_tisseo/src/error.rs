//! Tisseo error types

use thiserror::Error;

/// Errors that can occur while fetching stop schedules
///
/// Every variant is terminal for the request it occurred in; the fetch is a
/// single best-effort call and is never retried.
#[derive(Debug, Error)]
pub enum TisseoError {
    /// Connection to the Tisseo service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the Tisseo service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
