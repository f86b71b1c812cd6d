//! Value Objects - Immutable, identity-less domain primitives

mod destination_id;
mod short_time;
mod stop_area_id;
mod waiting_time;

pub use destination_id::DestinationId;
pub use short_time::{ShortTime, ShortTimeValue, TimeUnit};
pub use stop_area_id::StopAreaId;
pub use waiting_time::WaitingTime;
