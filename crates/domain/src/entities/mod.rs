//! Entities - Aggregates built fresh for every request

mod stop_schedules;

pub use stop_schedules::{DestinationSchedule, StopSchedules};
