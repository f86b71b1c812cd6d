//! Tisseo service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Tisseo real-time schedules service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TisseoConfig {
    /// Base URL for the Tisseo API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key appended to every request (externally managed secret)
    #[serde(default)]
    pub api_key: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of upcoming departures requested per destination
    #[serde(default = "default_departures_per_destination")]
    pub departures_per_destination: u8,

    /// Number of days of data requested from the timetable
    #[serde(default = "default_max_days")]
    pub max_days: u8,
}

fn default_base_url() -> String {
    "https://api.tisseo.fr".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_departures_per_destination() -> u8 {
    3
}

const fn default_max_days() -> u8 {
    1
}

impl Default for TisseoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            departures_per_destination: default_departures_per_destination(),
            max_days: default_max_days(),
        }
    }
}

impl TisseoConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.departures_per_destination == 0 {
            return Err("departures_per_destination must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TisseoConfig::default();
        assert_eq!(config.base_url, "https://api.tisseo.fr");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.departures_per_destination, 3);
        assert_eq!(config.max_days, 1);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_testing_config() {
        let config = TisseoConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = TisseoConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = TisseoConfig {
            base_url: String::new(),
            ..TisseoConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = TisseoConfig {
            timeout_secs: 0,
            ..TisseoConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_departures() {
        let config = TisseoConfig {
            departures_per_destination: 0,
            ..TisseoConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = TisseoConfig::for_testing();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TisseoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
        assert_eq!(deserialized.api_key, config.api_key);
        assert_eq!(
            deserialized.departures_per_destination,
            config.departures_per_destination
        );
    }
}
