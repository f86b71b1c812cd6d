//! Schedule board of a single stop at a single point in time
//!
//! Built fresh from one upstream payload, rendered once, then discarded.
//! Nothing here outlives a request/response cycle.

use serde::{Deserialize, Serialize};

use crate::value_objects::{DestinationId, WaitingTime};

/// The upcoming departures toward one destination
///
/// Holds at least one waiting time: a schedule entry is only created
/// together with its first departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationSchedule {
    name: String,
    waiting_times: Vec<WaitingTime>,
}

impl DestinationSchedule {
    /// Destination display name (terminus label)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upcoming departures, in upstream (chronological) order
    #[must_use]
    pub fn waiting_times(&self) -> &[WaitingTime] {
        &self.waiting_times
    }
}

/// All destination schedules for one queried stop
///
/// Destinations keep first-insertion order: the first destination on the
/// board is the one that gets the introductory phrase when the response is
/// spoken. Destination ids are kept alongside for filter resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopSchedules {
    stop_name: String,
    destinations: Vec<DestinationSchedule>,
    known_ids: Vec<(DestinationId, String)>,
}

impl StopSchedules {
    /// Create an empty board for a stop
    #[must_use]
    pub fn new(stop_name: impl Into<String>) -> Self {
        Self {
            stop_name: stop_name.into(),
            destinations: Vec::new(),
            known_ids: Vec::new(),
        }
    }

    /// The stop's display name
    #[must_use]
    pub fn stop_name(&self) -> &str {
        &self.stop_name
    }

    /// Record one upcoming departure toward a destination
    ///
    /// Departures sharing a destination display name are merged into one
    /// schedule, in recording order. The id is registered for later filter
    /// resolution.
    pub fn record_departure(&mut self, id: &DestinationId, name: &str, time: WaitingTime) {
        if !self.known_ids.iter().any(|(known, _)| known == id) {
            self.known_ids.push((id.clone(), name.to_string()));
        }

        if let Some(schedule) = self
            .destinations
            .iter_mut()
            .find(|schedule| schedule.name == name)
        {
            schedule.waiting_times.push(time);
        } else {
            self.destinations.push(DestinationSchedule {
                name: name.to_string(),
                waiting_times: vec![time],
            });
        }
    }

    /// Resolve a destination id to its display name
    #[must_use]
    pub fn destination_name(&self, id: &DestinationId) -> Option<&str> {
        self.known_ids
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, name)| name.as_str())
    }

    /// Look up a destination schedule by display name
    #[must_use]
    pub fn schedule_for(&self, name: &str) -> Option<&DestinationSchedule> {
        self.destinations
            .iter()
            .find(|schedule| schedule.name == name)
    }

    /// Destination schedules in first-insertion order
    #[must_use]
    pub fn destinations(&self) -> &[DestinationSchedule] {
        &self.destinations
    }

    /// Number of distinct destinations on the board
    #[must_use]
    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the board carries no destination at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
