//! Router assembly.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::messages::handlers::{list_messages, send_message};
use crate::participants::handlers::{create_participant, list_participants};
use crate::server::state::AppState;
use crate::status::handlers::update_status;

/// Create the application router.
///
/// # Routes
///
/// - `POST /participants` - Register a participant
/// - `GET /participants` - List every participant
/// - `POST /messages` - Record a message (sender from the `user` header)
/// - `GET /messages` - List messages visible to the caller
/// - `POST /status` - Refresh the caller's liveness timestamp
///
/// Cross-origin requests are permitted from any origin.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/participants",
            post(create_participant).get(list_participants),
        )
        .route("/messages", post(send_message).get(list_messages))
        .route("/status", post(update_status))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
