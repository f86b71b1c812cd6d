//! Application state shared across handlers

use std::sync::Arc;

use application::{AnnouncementService, SchedulesPort};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Announcement service rendering spoken schedule responses
    pub announcements: Arc<AnnouncementService>,
    /// Schedules port, probed by the readiness check
    pub schedules: Arc<dyn SchedulesPort>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
