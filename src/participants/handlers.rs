//! Handlers for POST /participants and GET /participants.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::Participant;
use crate::store::participants::{find_by_name, insert, list};
use crate::store::Store;

/// Register a participant.
///
/// The body is validated first (every violation reported, 422), then the
/// name is checked for uniqueness (409 on a duplicate) before the document
/// is inserted with a fresh `lastStatus`. The check and the insert are two
/// separate store operations; concurrent registrations of the same name can
/// slip through the gap, matching the store's lack of a uniqueness index.
pub async fn create_participant(
    State(store): State<Store>,
    Json(body): Json<Value>,
) -> Result<StatusCode, ApiError> {
    let name = validate_name(&body).map_err(ApiError::validation)?;

    if find_by_name(&store, &name).await?.is_some() {
        tracing::warn!("Participant name already in use: {}", name);
        return Err(ApiError::NameTaken);
    }

    let participant = Participant {
        name,
        last_status: Utc::now().timestamp_millis(),
    };
    insert(&store, &participant).await?;

    tracing::info!("Registered participant: {}", participant.name);
    Ok(StatusCode::CREATED)
}

/// List every participant, unfiltered.
pub async fn list_participants(
    State(store): State<Store>,
) -> Result<Json<Vec<Participant>>, ApiError> {
    let participants = list(&store).await?;
    Ok(Json(participants))
}

/// Validate the registration body.
///
/// The body is loose JSON so that a missing, null, empty, or non-string
/// `name` each produce their own message rather than a framework
/// deserialization error.
fn validate_name(body: &Value) -> Result<String, Vec<String>> {
    match body.get("name") {
        None | Some(Value::Null) => Err(vec!["\"name\" is required".to_string()]),
        Some(Value::String(name)) if name.is_empty() => {
            Err(vec!["\"name\" is not allowed to be empty".to_string()])
        }
        Some(Value::String(name)) => Ok(name.clone()),
        Some(_) => Err(vec!["\"name\" must be a string".to_string()]),
    }
}
