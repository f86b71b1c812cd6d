//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Waiting-time string does not follow the `hh:mm:ss` format
    #[error("Invalid waiting time: {0}")]
    InvalidWaitingTime(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
