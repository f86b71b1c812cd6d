//! Tisseo HTTP client
//!
//! Fetches real-time stop schedules from the `stops_schedules` endpoint of
//! the Tisseo API and parses them into typed models.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::TisseoConfig;
use crate::error::TisseoError;
use crate::models::{DepartureBoard, Destination, ScheduleEntry, StopArea};

/// Trait for Tisseo schedule clients
#[async_trait]
pub trait TisseoClient: Send + Sync {
    /// Fetch the schedule board for one stop area
    ///
    /// Issues exactly one outbound request; failures are terminal, there is
    /// no retry.
    async fn stop_schedules(&self, stop_area_id: &str) -> Result<DepartureBoard, TisseoError>;

    /// Check if the Tisseo service is reachable
    async fn is_healthy(&self) -> bool;
}

/// HTTP client for the Tisseo real-time API
#[derive(Debug, Clone)]
pub struct TisseoHttpClient {
    client: Client,
    config: TisseoConfig,
}

impl TisseoHttpClient {
    /// Create a new Tisseo client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TisseoConfig) -> Result<Self, TisseoError> {
        config
            .validate()
            .map_err(TisseoError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("tisseo-voice/0.1")
            .build()
            .map_err(|e| TisseoError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn schedules_url(&self) -> String {
        format!("{}/v1/stops_schedules.json", self.config.base_url)
    }

    /// Parse the raw schedules JSON into a typed departure board
    fn parse_schedules_response(body: &str) -> Result<DepartureBoard, TisseoError> {
        let raw: RawSchedulesResponse =
            serde_json::from_str(body).map_err(|e| TisseoError::ParseError(e.to_string()))?;

        let stop_areas = raw
            .departures
            .stop_areas
            .into_iter()
            .map(Self::convert_stop_area)
            .collect();

        Ok(DepartureBoard { stop_areas })
    }

    fn convert_stop_area(raw: RawStopArea) -> StopArea {
        let schedules = raw
            .schedules
            .into_iter()
            .map(Self::convert_schedule)
            .collect();
        StopArea {
            name: raw.name.unwrap_or_default(),
            schedules,
        }
    }

    fn convert_schedule(raw: RawSchedule) -> ScheduleEntry {
        let waiting_times = raw
            .journeys
            .into_iter()
            .filter_map(|journey| journey.waiting_time)
            .collect();
        ScheduleEntry {
            destination: Destination {
                id: raw.destination.id.unwrap_or_default(),
                name: raw.destination.name.unwrap_or_default(),
            },
            waiting_times,
        }
    }
}

#[async_trait]
impl TisseoClient for TisseoHttpClient {
    #[instrument(skip(self))]
    async fn stop_schedules(&self, stop_area_id: &str) -> Result<DepartureBoard, TisseoError> {
        let url = self.schedules_url();

        let params = [
            ("timetableByArea", "1".to_string()),
            ("maxDays", self.config.max_days.to_string()),
            (
                "number",
                self.config.departures_per_destination.to_string(),
            ),
            ("key", self.config.api_key.clone()),
            ("stopAreaId", stop_area_id.to_string()),
        ];

        debug!(%url, "Fetching stop schedules");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TisseoError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TisseoError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TisseoError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TisseoError::ParseError(e.to_string()))?;

        let board = Self::parse_schedules_response(&body)?;

        if board.stop_areas.is_empty() {
            warn!(stop_area_id, "No stop area in schedules response");
        }

        Ok(board)
    }

    async fn is_healthy(&self) -> bool {
        let url = self.schedules_url();
        self.client
            .get(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .is_ok()
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawSchedulesResponse {
    departures: RawDepartures,
}

#[derive(Debug, Deserialize)]
struct RawDepartures {
    #[serde(rename = "stopAreas", default)]
    stop_areas: Vec<RawStopArea>,
}

#[derive(Debug, Deserialize)]
struct RawStopArea {
    name: Option<String>,
    #[serde(default)]
    schedules: Vec<RawSchedule>,
}

#[derive(Debug, Deserialize)]
struct RawSchedule {
    destination: RawDestination,
    #[serde(default)]
    journeys: Vec<RawJourney>,
}

#[derive(Debug, Deserialize)]
struct RawDestination {
    id: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawJourney {
    waiting_time: Option<String>,
}
