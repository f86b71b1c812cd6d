//! Domain layer for the Tisseo voice webhook
//!
//! Contains the core business logic: waiting-time value objects, the
//! stop-schedules board, and the French speech-fragment algorithms.
//! This layer has no I/O dependencies and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod speech;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use speech::{Utterance, waiting_times_phrase};
pub use value_objects::*;
