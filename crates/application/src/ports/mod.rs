//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement them.

mod schedules_port;

#[cfg(test)]
pub use schedules_port::MockSchedulesPort;
pub use schedules_port::SchedulesPort;
