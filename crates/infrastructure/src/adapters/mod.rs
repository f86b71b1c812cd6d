//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod tisseo_adapter;

pub use tisseo_adapter::TisseoScheduleAdapter;
