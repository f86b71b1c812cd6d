//! Application services - Use case implementations

mod announcement_service;

pub use announcement_service::{AnnouncementService, DestinationResolution};
