//! Stop-schedules port
//!
//! Defines the interface for fetching a stop's real-time schedule board.
//! The infrastructure layer implements this port on top of the Tisseo API.

use async_trait::async_trait;
use domain::{StopAreaId, StopSchedules};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for real-time stop schedules
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SchedulesPort: Send + Sync {
    /// Fetch the schedule board of one stop area
    ///
    /// `Ok(None)` means the upstream answered but carried no schedule data
    /// for this stop (a distinct empty-result state, not a failure). One
    /// outbound call per invocation, no retries.
    async fn stop_schedules(
        &self,
        stop_area: &StopAreaId,
    ) -> Result<Option<StopSchedules>, ApplicationError>;

    /// Check if the upstream schedule service is reachable
    async fn is_healthy(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn SchedulesPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SchedulesPort>();
    }
}
