//! Infrastructure layer
//!
//! Adapters connecting application ports to the Tisseo integration, and the
//! application configuration.

pub mod adapters;
pub mod config;

pub use adapters::TisseoScheduleAdapter;
pub use config::{AppConfig, ServerConfig};
