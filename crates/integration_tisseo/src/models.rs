//! Tisseo schedule data models
//!
//! Typed representations of the `stops_schedules` payload: stop areas,
//! their per-destination schedule entries, and the raw waiting-time
//! countdown strings.

use serde::{Deserialize, Serialize};

/// The departures section of one `stops_schedules` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureBoard {
    /// Stop areas matched by the query (the first one carries the data)
    pub stop_areas: Vec<StopArea>,
}

impl DepartureBoard {
    /// The stop area the schedules belong to, if the query matched one
    #[must_use]
    pub fn first_stop_area(&self) -> Option<&StopArea> {
        self.stop_areas.first()
    }
}

/// One stop area with its per-destination schedules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopArea {
    /// Stop display name
    pub name: String,
    /// Schedule entries, one per destination group, in upstream order
    pub schedules: Vec<ScheduleEntry>,
}

/// Upcoming journeys toward one destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The destination (terminus) these journeys head to
    pub destination: Destination,
    /// Waiting times of the upcoming journeys, `hh:mm:ss`, chronological
    pub waiting_times: Vec<String>,
}

/// A destination label with its identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Opaque destination identifier
    pub id: String,
    /// Display name (terminus label)
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_stop_area_of_empty_board_is_none() {
        let board = DepartureBoard { stop_areas: vec![] };
        assert!(board.first_stop_area().is_none());
    }

    #[test]
    fn first_stop_area_picks_the_first() {
        let board = DepartureBoard {
            stop_areas: vec![
                StopArea {
                    name: "Jean Jaurès".to_string(),
                    schedules: vec![],
                },
                StopArea {
                    name: "Capitole".to_string(),
                    schedules: vec![],
                },
            ],
        };
        assert_eq!(board.first_stop_area().unwrap().name, "Jean Jaurès");
    }
}
