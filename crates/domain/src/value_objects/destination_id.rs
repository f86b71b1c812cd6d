//! Identifier of a destination (terminus) reachable from a stop

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// An opaque Tisseo destination identifier
///
/// A destination id names the terminus a group of journeys is heading to.
/// It is matched against the ids found on a stop's schedule board; an id
/// that matches nothing is not an error (the whole board is told instead).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DestinationId(String);

impl DestinationId {
    /// Create a destination id from a raw string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or whitespace-only. An unset
    /// webhook slot must be represented as `None`, not as an empty id.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "destination id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// The raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_id_is_accepted() {
        let id = DestinationId::new("stop_area:SA_45").unwrap();
        assert_eq!(id.as_str(), "stop_area:SA_45");
    }

    #[test]
    fn empty_id_is_rejected() {
        assert!(DestinationId::new("").is_err());
        assert!(DestinationId::new(" \t").is_err());
    }
}
