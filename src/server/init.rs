//! Application startup.
//!
//! Builds the configured store connection and the router. Startup failures
//! are typed: a missing environment variable or an unusable store URI aborts
//! before the listener is bound.

use axum::Router;
use thiserror::Error;

use crate::routes::router::create_router;
use crate::server::config::{Config, ConfigError};
use crate::server::state::AppState;
use crate::store::Store;

/// Startup failure.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The store connection could not be opened.
    #[error("failed to open store connection: {0}")]
    Store(#[from] mongodb::error::Error),
}

/// Create the configured application router.
pub async fn create_app() -> Result<Router, ServerError> {
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded for database {}", config.db_name);

    let store = Store::connect(&config).await?;

    Ok(create_router(AppState { store }))
}
