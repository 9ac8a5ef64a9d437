//! Store operations for the participant collection.

use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::models::Participant;
use crate::store::Store;

/// Look up a participant by exact (case-sensitive) name.
pub async fn find_by_name(
    store: &Store,
    name: &str,
) -> Result<Option<Participant>, mongodb::error::Error> {
    store.participants().find_one(doc! { "name": name }).await
}

/// Insert a new participant document.
///
/// The store holds no uniqueness index; callers check for duplicates first,
/// which leaves the usual check-then-act window under concurrent writes.
pub async fn insert(
    store: &Store,
    participant: &Participant,
) -> Result<(), mongodb::error::Error> {
    store.participants().insert_one(participant).await?;
    Ok(())
}

/// The full participant collection, unfiltered and unpaginated.
pub async fn list(store: &Store) -> Result<Vec<Participant>, mongodb::error::Error> {
    store.participants().find(doc! {}).await?.try_collect().await
}

/// Refresh `lastStatus` for the named participant.
///
/// Returns whether a participant matched; nothing is written when none does.
pub async fn touch(
    store: &Store,
    name: &str,
    now_ms: i64,
) -> Result<bool, mongodb::error::Error> {
    let result = store
        .participants()
        .update_one(
            doc! { "name": name },
            doc! { "$set": { "lastStatus": now_ms } },
        )
        .await?;

    Ok(result.matched_count > 0)
}
