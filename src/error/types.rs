//! Error type definitions.

use axum::http::StatusCode;
use thiserror::Error;

/// Client-facing body for a duplicate participant name.
pub const NAME_TAKEN: &str = "Este nome já está em uso";

/// Client-facing body when the message sender is not registered.
pub const UNKNOWN_SENDER: &str = "Usuário não cadastrado";

/// Client-facing body when a status update names no participant.
pub const UNKNOWN_USER: &str = "Usuário não encontrado";

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed validation; every violation is reported together.
    #[error("invalid request body: {errors:?}")]
    Validation {
        /// One message per violated field
        errors: Vec<String>,
    },

    /// Participant name already registered.
    #[error("participant name already in use")]
    NameTaken,

    /// The `user` header does not name a registered participant.
    ///
    /// Semantically a not-found condition, but the message endpoint reports
    /// it with the validation status code.
    #[error("sender is not a registered participant")]
    UnknownSender,

    /// Status refresh for a participant that does not exist.
    #[error("user not found")]
    UnknownUser,

    /// Document-store failure. Details are logged, never sent to the client.
    #[error("store error: {0}")]
    Store(#[from] mongodb::error::Error),
}

impl ApiError {
    /// Wrap a collected list of validation messages.
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }

    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::UnknownSender => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NameTaken => StatusCode::CONFLICT,
            Self::UnknownUser => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
