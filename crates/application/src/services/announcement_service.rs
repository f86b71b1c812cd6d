//! Stop-schedules announcement use case
//!
//! Fetches a stop's schedule board through the [`SchedulesPort`] and renders
//! it as a single French SSML utterance. Every failure path degrades to a
//! fixed spoken apology; this service never surfaces an error to the caller.

use std::sync::Arc;

use domain::{DestinationId, StopAreaId, StopSchedules, Utterance, waiting_times_phrase};
use tracing::{info, instrument, warn};

use crate::ports::SchedulesPort;

/// Spoken when the upstream fetch fails or carries no schedule data
const NO_DEPARTURES_PHRASE: &str =
    "Aucun passage de transport en commun n'a été trouvé. N'hésitez pas à réessayer.";

/// Spoken only before the first destination of an enumeration
const FIRST_DESTINATION_HELPER: &str = "les prochains passages sont ";

/// Pause marker and sign-off closing every schedule response
const SIGN_OFF: &str = "<break time=\"0.5s\"/>A bientôt.";

/// Outcome of matching the optional destination slot against the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationResolution {
    /// No destination was asked for; the whole board is told
    AllDestinations,
    /// The asked destination is on the board; only it is told
    Focused(String),
    /// The asked destination is not on the board; the whole board is told
    /// after an acknowledgment
    NotUnderstood,
}

/// Builds spoken schedule announcements for a stop
pub struct AnnouncementService {
    schedules: Arc<dyn SchedulesPort>,
}

impl std::fmt::Debug for AnnouncementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnouncementService").finish_non_exhaustive()
    }
}

impl AnnouncementService {
    /// Create a new announcement service
    #[must_use]
    pub fn new(schedules: Arc<dyn SchedulesPort>) -> Self {
        Self { schedules }
    }

    /// Announce the next departures at a stop
    ///
    /// The destination filter is optional; an unmatched destination degrades
    /// gracefully to the full board, it never fails the response.
    #[instrument(skip(self), fields(stop = %stop_area))]
    pub async fn stop_announcement(
        &self,
        stop_area: &StopAreaId,
        destination: Option<&DestinationId>,
    ) -> Utterance {
        match self.schedules.stop_schedules(stop_area).await {
            Ok(Some(board)) => {
                let resolution = Self::resolve_destination(&board, destination);
                info!(
                    destinations = board.destination_count(),
                    ?resolution,
                    "Announcing stop schedules"
                );
                Utterance::Ssml(Self::compose(&board, &resolution))
            },
            Ok(None) => {
                info!("No schedule data for stop");
                Utterance::Plain(NO_DEPARTURES_PHRASE.to_string())
            },
            Err(e) => {
                warn!(error = %e, "Schedule fetch failed");
                Utterance::Plain(NO_DEPARTURES_PHRASE.to_string())
            },
        }
    }

    /// Match the optional destination slot against the board's known ids
    fn resolve_destination(
        board: &StopSchedules,
        destination: Option<&DestinationId>,
    ) -> DestinationResolution {
        match destination {
            None => DestinationResolution::AllDestinations,
            Some(id) => board.destination_name(id).map_or(
                DestinationResolution::NotUnderstood,
                |name| DestinationResolution::Focused(name.to_string()),
            ),
        }
    }

    /// Assemble the SSML body for one board and resolution
    fn compose(board: &StopSchedules, resolution: &DestinationResolution) -> String {
        let mut speech = String::from("<speak>");
        let stop = board.stop_name();

        // A focused name always comes from the board itself, so the lookup
        // only misses when the resolution was not a match.
        let focused = match resolution {
            DestinationResolution::Focused(name) => board.schedule_for(name),
            _ => None,
        };

        if let Some(schedule) = focused {
            speech += &format!(
                "Les prochains passages à l'arrêt {stop} en direction de {} sont dans {}. ",
                schedule.name(),
                waiting_times_phrase(schedule.waiting_times())
            );
        } else {
            if *resolution == DestinationResolution::NotUnderstood {
                speech += "Je n'ai pas saisi la destination, mais ";
            }

            let count = board.destination_count();
            let destination_introduction = if count > 2 {
                format!(" en fonctions des {count} différentes déstinations")
            } else {
                String::new()
            };
            speech += &format!(
                "Voici les prochains passages à l'arrêt {stop}{destination_introduction}. "
            );

            let mut helper = FIRST_DESTINATION_HELPER;
            for schedule in board.destinations() {
                speech += &format!(
                    "En direction de {}, {helper}dans {}. ",
                    schedule.name(),
                    waiting_times_phrase(schedule.waiting_times())
                );
                helper = "";
            }
        }

        speech += SIGN_OFF;
        speech += "</speak>";
        speech
    }
}
