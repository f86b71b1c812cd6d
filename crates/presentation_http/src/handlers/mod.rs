//! HTTP request handlers

pub mod fulfillment;
pub mod health;
