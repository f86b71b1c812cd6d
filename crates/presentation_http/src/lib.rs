//! HTTP presentation layer for the Tisseo voice webhook
//!
//! Exposes the Dialogflow fulfillment endpoint and the health probes.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
