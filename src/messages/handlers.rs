//! Handlers for POST /messages and GET /messages.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::extract::UserHeader;
use crate::messages::visibility::{parse_limit, take_last, visible_to};
use crate::models::{Message, MessageKind};
use crate::store::participants::find_by_name;
use crate::store::{messages, Store};

/// Record a message.
///
/// The body is validated first (every violation reported, 422). The sender
/// comes from the `user` header and must name a registered participant;
/// an unknown sender is reported with the validation status code, which the
/// API contract keeps even though it is a not-found condition. A missing
/// header behaves like an unregistered sender.
pub async fn send_message(
    State(store): State<Store>,
    UserHeader(user): UserHeader,
    Json(body): Json<Value>,
) -> Result<StatusCode, ApiError> {
    let draft = validate_message(&body).map_err(ApiError::validation)?;

    let sender = user.unwrap_or_default();
    if find_by_name(&store, &sender).await?.is_none() {
        tracing::warn!("Rejected message from unregistered sender: {:?}", sender);
        return Err(ApiError::UnknownSender);
    }

    let message = Message {
        from: sender,
        to: draft.to,
        text: draft.text,
        kind: draft.kind,
        time: wall_clock_time(),
    };
    messages::insert(&store, &message).await?;

    tracing::info!("Recorded message from {} to {}", message.from, message.to);
    Ok(StatusCode::CREATED)
}

/// Query parameters for GET /messages.
///
/// `limit` stays a raw string so the lenient parse in `visibility` owns the
/// "not a valid positive integer means unlimited" rule.
#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    limit: Option<String>,
}

/// List the messages visible to the caller.
///
/// Fetches the collection in insertion order, keeps what `visible_to`
/// allows for the `user` header (absent header reads as the empty name, so
/// only broadcasts and public messages match), then returns the last
/// `limit` entries.
pub async fn list_messages(
    State(store): State<Store>,
    UserHeader(user): UserHeader,
    Query(query): Query<ListMessagesQuery>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let user = user.unwrap_or_default();

    let all = messages::list_all(&store).await?;
    let visible: Vec<Message> = all
        .into_iter()
        .filter(|message| visible_to(message, &user))
        .collect();

    let limit = parse_limit(query.limit.as_deref());
    Ok(Json(take_last(visible, limit)))
}

/// A validated POST /messages body, before the sender is attached.
struct MessageDraft {
    to: String,
    text: String,
    kind: MessageKind,
}

/// Validate the message body, collecting every violation.
fn validate_message(body: &Value) -> Result<MessageDraft, Vec<String>> {
    let mut errors = Vec::new();

    let to = required_string(body, "to", &mut errors);
    let text = required_string(body, "text", &mut errors);

    let kind = match body.get("type") {
        None | Some(Value::Null) => {
            errors.push("\"type\" is required".to_string());
            None
        }
        Some(Value::String(kind)) => match kind.as_str() {
            "message" => Some(MessageKind::Public),
            "private_message" => Some(MessageKind::Private),
            _ => {
                errors.push("\"type\" must be one of [message, private_message]".to_string());
                None
            }
        },
        Some(_) => {
            errors.push("\"type\" must be one of [message, private_message]".to_string());
            None
        }
    };

    match (to, text, kind) {
        (Some(to), Some(text), Some(kind)) => Ok(MessageDraft { to, text, kind }),
        _ => Err(errors),
    }
}

fn required_string(body: &Value, field: &str, errors: &mut Vec<String>) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(format!("\"{field}\" is required"));
            None
        }
        Some(Value::String(value)) if value.is_empty() => {
            errors.push(format!("\"{field}\" is not allowed to be empty"));
            None
        }
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.push(format!("\"{field}\" must be a string"));
            None
        }
    }
}

/// Capture the send time as zero-padded 24-hour `HH:MM:SS`.
fn wall_clock_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
