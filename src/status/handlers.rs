//! Handler for POST /status.

use axum::{extract::State, http::StatusCode};
use chrono::Utc;

use crate::error::ApiError;
use crate::extract::UserHeader;
use crate::store::participants::touch;
use crate::store::Store;

/// Refresh the caller's liveness timestamp.
///
/// A single conditional update: when the `user` header names a registered
/// participant its `lastStatus` becomes now, otherwise nothing is written
/// and the caller gets a 404. A missing header is the same 404 without a
/// store round trip.
pub async fn update_status(
    State(store): State<Store>,
    UserHeader(user): UserHeader,
) -> Result<StatusCode, ApiError> {
    let Some(name) = user else {
        tracing::warn!("Status update without a user header");
        return Err(ApiError::UnknownUser);
    };

    if !touch(&store, &name, Utc::now().timestamp_millis()).await? {
        tracing::warn!("Status update for unknown participant: {}", name);
        return Err(ApiError::UnknownUser);
    }

    Ok(StatusCode::OK)
}
