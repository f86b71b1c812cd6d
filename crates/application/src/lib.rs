//! Application layer - Use cases and orchestration
//!
//! Contains the announcement use case and the port the infrastructure
//! adapters implement. Orchestrates domain objects, never talks to the
//! network itself.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
