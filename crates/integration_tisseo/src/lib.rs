//! Tisseo real-time API integration
//!
//! Provides real-time stop schedules for the Toulouse public-transit network
//! via the [Tisseo open API](https://data.toulouse-metropole.fr/explore/dataset/api-temps-reel-tisseo/information/)
//! (`/v1/stops_schedules.json`).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern: [`TisseoClient`] defines the
//! interface for schedule fetches, implemented by [`TisseoHttpClient`].
//! Responses are parsed into the typed [`DepartureBoard`] model; callers map
//! that onto their own domain.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_tisseo::{TisseoClient, TisseoConfig, TisseoHttpClient};
//!
//! let config = TisseoConfig {
//!     api_key: "secret".to_string(),
//!     ..TisseoConfig::default()
//! };
//! let client = TisseoHttpClient::new(&config)?;
//! let board = client.stop_schedules("stop_area:SA_1926").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{TisseoClient, TisseoHttpClient};
pub use config::TisseoConfig;
pub use error::TisseoError;
pub use models::{DepartureBoard, Destination, ScheduleEntry, StopArea};
