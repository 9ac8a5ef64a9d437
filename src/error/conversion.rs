//! Error conversion implementations.
//!
//! `IntoResponse` lets handlers return `Result<_, ApiError>` and have the
//! framework render the failure. Validation failures carry their collected
//! messages as a JSON array; conflict and not-found responses carry their
//! localized text bodies; store failures degrade to a generic 500 with the
//! full error logged server-side.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::{ApiError, NAME_TAKEN, UNKNOWN_SENDER, UNKNOWN_USER};

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation { errors } => (status, Json(errors)).into_response(),
            ApiError::NameTaken => (status, NAME_TAKEN).into_response(),
            ApiError::UnknownSender => (status, UNKNOWN_SENDER).into_response(),
            ApiError::UnknownUser => (status, UNKNOWN_USER).into_response(),
            ApiError::Store(err) => {
                tracing::error!("Store operation failed: {:?}", err);
                (status, "Internal Server Error").into_response()
            }
        }
    }
}
