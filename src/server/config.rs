//! Environment configuration.
//!
//! Every variable is required; a missing one produces a typed error and the
//! server refuses to start. Variables are read after `dotenv::dotenv()` has
//! run in `main`, so a local `.env` file works in development.

use thiserror::Error;

/// Store location and collection names, loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection URI (`DB_URI`)
    pub db_uri: String,
    /// Database name (`DB_NAME`)
    pub db_name: String,
    /// Participant collection name (`USER_COLLECTION`)
    pub user_collection: String,
    /// Message collection name (`MESSAGE_COLLECTION`)
    pub message_collection: String,
}

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

impl Config {
    /// Load the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            db_uri: require("DB_URI")?,
            db_name: require("DB_NAME")?,
            user_collection: require("USER_COLLECTION")?,
            message_collection: require("MESSAGE_COLLECTION")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}
