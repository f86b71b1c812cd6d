//! Identifier of a logical stop area in the Tisseo network

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// An opaque Tisseo stop-area identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StopAreaId(String);

impl StopAreaId {
    /// Create a stop-area id from a raw string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "stop area id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// The raw identifier as sent to the upstream API
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopAreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
