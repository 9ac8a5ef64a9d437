//! Store operations for the message collection.

use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::models::Message;
use crate::store::Store;

/// Append a message document.
pub async fn insert(store: &Store, message: &Message) -> Result<(), mongodb::error::Error> {
    store.messages().insert_one(message).await?;
    Ok(())
}

/// All messages in insertion order.
///
/// Visibility filtering and limiting happen in the handler; the store query
/// stays a plain scan in natural order.
pub async fn list_all(store: &Store) -> Result<Vec<Message>, mongodb::error::Error> {
    store.messages().find(doc! {}).await?.try_collect().await
}
