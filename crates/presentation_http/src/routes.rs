//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Dialogflow fulfillment webhook
        .route(
            "/webhook/dialogflow",
            post(handlers::fulfillment::handle_fulfillment),
        )
        // Attach state
        .with_state(state)
}
