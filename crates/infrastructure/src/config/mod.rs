//! Application configuration
//!
//! Loaded from an optional `config.{toml,yaml,json}` file with
//! `TISSEOVOICE_*` environment-variable overrides. Nesting levels are
//! separated by a double underscore so keys containing underscores stay
//! addressable (e.g. `TISSEOVOICE_TISSEO__API_KEY`,
//! `TISSEOVOICE_SERVER__PORT`).

mod server;

use integration_tisseo::TisseoConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Tisseo API settings
    #[serde(default)]
    pub tisseo: TisseoConfig,
}

impl AppConfig {
    /// Load the configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if the config file or environment overrides cannot
    /// be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("tisseo.base_url", "https://api.tisseo.fr")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., TISSEOVOICE_SERVER__PORT)
            .add_source(Self::environment_source());

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Environment-variable source with `__` as the nesting separator
    ///
    /// A single underscore would split `api_key` into `api.key`; the double
    /// underscore keeps underscored field names addressable.
    fn environment_source() -> config::Environment {
        config::Environment::with_prefix("TISSEOVOICE")
            .separator("__")
            .try_parsing(true)
    }
}
