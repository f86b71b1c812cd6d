//! Tisseo adapter - Implements SchedulesPort using integration_tisseo
//!
//! This is where the raw Tisseo payload becomes a domain schedule board:
//! first stop area only, departures grouped by destination in upstream
//! order, malformed countdowns skipped.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::SchedulesPort;
use async_trait::async_trait;
use domain::{DestinationId, StopAreaId, StopSchedules, WaitingTime};
use integration_tisseo::TisseoClient;
use tracing::{debug, instrument, warn};

/// Adapter for real-time stop schedules backed by the Tisseo API
pub struct TisseoScheduleAdapter {
    client: Arc<dyn TisseoClient>,
}

impl std::fmt::Debug for TisseoScheduleAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TisseoScheduleAdapter").finish_non_exhaustive()
    }
}

impl TisseoScheduleAdapter {
    /// Create a new schedule adapter
    #[must_use]
    pub fn new(client: Arc<dyn TisseoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SchedulesPort for TisseoScheduleAdapter {
    #[instrument(skip(self), fields(stop = %stop_area))]
    async fn stop_schedules(
        &self,
        stop_area: &StopAreaId,
    ) -> Result<Option<StopSchedules>, ApplicationError> {
        let departures = self
            .client
            .stop_schedules(stop_area.as_str())
            .await
            .map_err(|e| {
                ApplicationError::ExternalService(format!("Tisseo fetch failed: {e}"))
            })?;

        let Some(area) = departures.stop_areas.into_iter().next() else {
            debug!("Upstream returned zero stop areas");
            return Ok(None);
        };

        let mut board = StopSchedules::new(area.name);
        for entry in area.schedules {
            let Ok(destination_id) = DestinationId::new(&entry.destination.id) else {
                warn!(
                    destination = %entry.destination.name,
                    "Schedule entry without destination id, skipping"
                );
                continue;
            };

            for raw in entry.waiting_times {
                match raw.parse::<WaitingTime>() {
                    Ok(time) => {
                        board.record_departure(&destination_id, &entry.destination.name, time);
                    },
                    Err(e) => {
                        warn!(error = %e, raw = %raw, "Malformed waiting time, skipping");
                    },
                }
            }
        }

        if board.is_empty() {
            debug!("Stop area carries no upcoming departure");
            return Ok(None);
        }

        Ok(Some(board))
    }

    async fn is_healthy(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use integration_tisseo::{
        DepartureBoard, Destination, ScheduleEntry, StopArea, TisseoError,
    };
    use mockall::mock;

    use super::*;

    mock! {
        Client {}

        #[async_trait]
        impl TisseoClient for Client {
            async fn stop_schedules(
                &self,
                stop_area_id: &str,
            ) -> Result<DepartureBoard, TisseoError>;
            async fn is_healthy(&self) -> bool;
        }
    }

    fn stop(raw: &str) -> StopAreaId {
        StopAreaId::new(raw).unwrap()
    }

    fn entry(id: &str, name: &str, waiting_times: &[&str]) -> ScheduleEntry {
        ScheduleEntry {
            destination: Destination {
                id: id.to_string(),
                name: name.to_string(),
            },
            waiting_times: waiting_times.iter().map(ToString::to_string).collect(),
        }
    }

    fn adapter_returning(result: Result<DepartureBoard, TisseoError>) -> TisseoScheduleAdapter {
        let mut client = MockClient::new();
        client
            .expect_stop_schedules()
            .times(1)
            .return_once(move |_| result);
        TisseoScheduleAdapter::new(Arc::new(client))
    }

    #[tokio::test]
    async fn builds_board_from_first_stop_area() {
        let board = DepartureBoard {
            stop_areas: vec![StopArea {
                name: "Jean Jaurès".to_string(),
                schedules: vec![
                    entry("d1", "CentreVille", &["00:03:00"]),
                    entry("d2", "Gare", &["00:01:00", "00:20:00"]),
                ],
            }],
        };

        let adapter = adapter_returning(Ok(board));
        let schedules = adapter
            .stop_schedules(&stop("sa:1"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(schedules.stop_name(), "Jean Jaurès");
        assert_eq!(schedules.destination_count(), 2);
        let names: Vec<&str> = schedules.destinations().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["CentreVille", "Gare"]);
        assert_eq!(
            schedules.schedule_for("Gare").unwrap().waiting_times().len(),
            2
        );
        assert_eq!(
            schedules.destination_name(&DestinationId::new("d2").unwrap()),
            Some("Gare")
        );
    }

    #[tokio::test]
    async fn only_the_first_stop_area_is_read() {
        let board = DepartureBoard {
            stop_areas: vec![
                StopArea {
                    name: "First".to_string(),
                    schedules: vec![entry("d1", "CentreVille", &["00:03:00"])],
                },
                StopArea {
                    name: "Second".to_string(),
                    schedules: vec![entry("d9", "Ailleurs", &["00:09:00"])],
                },
            ],
        };

        let adapter = adapter_returning(Ok(board));
        let schedules = adapter
            .stop_schedules(&stop("sa:1"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(schedules.stop_name(), "First");
        assert!(schedules.schedule_for("Ailleurs").is_none());
    }

    #[tokio::test]
    async fn zero_stop_areas_is_no_data() {
        let adapter = adapter_returning(Ok(DepartureBoard { stop_areas: vec![] }));
        let result = adapter.stop_schedules(&stop("sa:1")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn stop_area_without_departures_is_no_data() {
        let board = DepartureBoard {
            stop_areas: vec![StopArea {
                name: "Jean Jaurès".to_string(),
                schedules: vec![entry("d1", "CentreVille", &[])],
            }],
        };

        let adapter = adapter_returning(Ok(board));
        let result = adapter.stop_schedules(&stop("sa:1")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn malformed_waiting_times_are_skipped() {
        let board = DepartureBoard {
            stop_areas: vec![StopArea {
                name: "Jean Jaurès".to_string(),
                schedules: vec![entry("d1", "CentreVille", &["garbage", "00:04:00"])],
            }],
        };

        let adapter = adapter_returning(Ok(board));
        let schedules = adapter
            .stop_schedules(&stop("sa:1"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            schedules
                .schedule_for("CentreVille")
                .unwrap()
                .waiting_times(),
            &["00:04:00".parse::<WaitingTime>().unwrap()]
        );
    }

    #[tokio::test]
    async fn transport_failure_maps_to_external_service_error() {
        let adapter =
            adapter_returning(Err(TisseoError::ConnectionFailed("refused".to_string())));
        let result = adapter.stop_schedules(&stop("sa:1")).await;

        assert!(matches!(
            result,
            Err(ApplicationError::ExternalService(_))
        ));
    }

    #[tokio::test]
    async fn health_delegates_to_client() {
        let mut client = MockClient::new();
        client.expect_is_healthy().times(1).return_once(|| true);
        let adapter = TisseoScheduleAdapter::new(Arc::new(client));
        assert!(adapter.is_healthy().await);
    }
}
