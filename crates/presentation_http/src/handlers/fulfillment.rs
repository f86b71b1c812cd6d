//! Dialogflow fulfillment webhook handler
//!
//! Receives the Dialogflow v2 fulfillment request for the `StopsSchedules`
//! intent and answers with a conversation-closing Actions-on-Google payload
//! carrying the spoken schedule announcement.

use axum::{Json, extract::State};
use domain::{DestinationId, StopAreaId, Utterance};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// The only intent this webhook fulfills
pub const STOPS_SCHEDULES_INTENT: &str = "StopsSchedules";

/// Spoken for intents the webhook does not know
const UNKNOWN_INTENT_PHRASE: &str = "Je ne sais pas encore répondre à cette demande.";

/// Dialogflow v2 fulfillment request (the fields we read)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default)]
    pub response_id: Option<String>,
    pub query_result: QueryResult,
    #[serde(default)]
    pub session: Option<String>,
}

/// The matched intent and its slot values
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub intent: Option<Intent>,
    #[serde(default)]
    pub parameters: ScheduleParameters,
}

/// Intent metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Slot values of the `StopsSchedules` intent
///
/// Dialogflow sends unset slots as empty strings, not as missing fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleParameters {
    /// Stop the user wants to leave from (required)
    #[serde(default)]
    pub stop_id: String,
    /// Destination the user wants to reach (optional, empty when unset)
    #[serde(default)]
    pub destination_id: String,
}

/// Dialogflow fulfillment response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_text: Option<String>,
    pub payload: GooglePayload,
}

/// Platform-specific payload wrapper
#[derive(Debug, Serialize)]
pub struct GooglePayload {
    pub google: GoogleResponse,
}

/// Actions-on-Google response; `expect_user_response: false` closes the
/// conversation after the utterance is spoken
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleResponse {
    pub expect_user_response: bool,
    pub rich_response: RichResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichResponse {
    pub items: Vec<ResponseItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseItem {
    pub simple_response: SimpleResponse,
}

/// A single spoken item, either SSML markup or plain text
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_to_speech: Option<String>,
}

impl WebhookResponse {
    /// Build a conversation-closing response from an utterance
    #[must_use]
    pub fn close_with(utterance: Utterance) -> Self {
        let (fulfillment_text, simple_response) = match utterance {
            Utterance::Ssml(markup) => (
                None,
                SimpleResponse {
                    ssml: Some(markup),
                    text_to_speech: None,
                },
            ),
            Utterance::Plain(text) => (
                Some(text.clone()),
                SimpleResponse {
                    ssml: None,
                    text_to_speech: Some(text),
                },
            ),
        };

        Self {
            fulfillment_text,
            payload: GooglePayload {
                google: GoogleResponse {
                    expect_user_response: false,
                    rich_response: RichResponse {
                        items: vec![ResponseItem { simple_response }],
                    },
                },
            },
        }
    }
}

/// Fulfill one Dialogflow request
#[instrument(skip(state, request), fields(response_id = ?request.response_id))]
pub async fn handle_fulfillment(
    State(state): State<AppState>,
    Json(request): Json<WebhookRequest>,
) -> Result<Json<WebhookResponse>, ApiError> {
    let intent = request
        .query_result
        .intent
        .as_ref()
        .and_then(|intent| intent.display_name.as_deref());

    if intent != Some(STOPS_SCHEDULES_INTENT) {
        debug!(?intent, "Unhandled intent");
        return Ok(Json(WebhookResponse::close_with(Utterance::Plain(
            UNKNOWN_INTENT_PHRASE.to_string(),
        ))));
    }

    let parameters = &request.query_result.parameters;
    let stop_area = StopAreaId::new(parameters.stop_id.clone())
        .map_err(|_| ApiError::BadRequest("stopId parameter is required".to_string()))?;

    // An empty slot means the user gave no destination
    let destination = if parameters.destination_id.trim().is_empty() {
        None
    } else {
        Some(
            DestinationId::new(parameters.destination_id.clone())
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        )
    };

    let utterance = state
        .announcements
        .stop_announcement(&stop_area, destination.as_ref())
        .await;

    Ok(Json(WebhookResponse::close_with(utterance)))
}
