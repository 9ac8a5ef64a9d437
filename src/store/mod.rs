//! Document-store access layer.
//!
//! One long-lived client serves every request; the driver keeps its own
//! connection pool, so handlers never open or close connections themselves.
//! Collection-level operations live in the per-collection submodules.

/// Message collection operations
pub mod messages;

/// Participant collection operations
pub mod participants;

use mongodb::{Client, Collection, Database};

use crate::models::{Message, Participant};
use crate::server::config::Config;

/// Handle to the document store.
///
/// Wraps the selected database plus the configured collection names.
/// Cloning is cheap and every clone shares the same underlying pool.
#[derive(Clone)]
pub struct Store {
    database: Database,
    user_collection: String,
    message_collection: String,
}

impl Store {
    /// Open the store from configuration.
    ///
    /// Connection failures are typed and propagated so callers can map them
    /// deterministically instead of carrying an unusable handle. The driver
    /// establishes connections lazily; a store that is down at startup
    /// surfaces as per-request 500s, not a startup crash.
    pub async fn connect(config: &Config) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(&config.db_uri).await?;
        let database = client.database(&config.db_name);
        tracing::info!("Connected to document store at {}", config.db_name);

        Ok(Self {
            database,
            user_collection: config.user_collection.clone(),
            message_collection: config.message_collection.clone(),
        })
    }

    pub(crate) fn participants(&self) -> Collection<Participant> {
        self.database.collection(&self.user_collection)
    }

    pub(crate) fn messages(&self) -> Collection<Message> {
        self.database.collection(&self.message_collection)
    }
}
