//! Pure filtering logic for GET /messages.
//!
//! Filtering happens in the handler rather than in the store query so the
//! visibility rule and the limit semantics stay testable without a live
//! store.

use crate::models::{Message, MessageKind, BROADCAST_RECIPIENT};

/// Whether `user` may see `message`.
///
/// A message is visible when the user sent it, is its addressee, when it is
/// addressed to everyone, or when it is a public message regardless of
/// recipient.
pub fn visible_to(message: &Message, user: &str) -> bool {
    message.from == user
        || message.to == user
        || message.to == BROADCAST_RECIPIENT
        || message.kind == MessageKind::Public
}

/// Lenient `limit` parse.
///
/// Anything that is not a valid positive integer - absent, empty,
/// non-numeric, zero, negative, or carrying trailing garbage - means
/// "no limit".
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|limit| *limit > 0)
}

/// Keep the last `limit` items, preserving order; `None` keeps everything.
pub fn take_last<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        if items.len() > limit {
            items.drain(..items.len() - limit);
        }
    }
    items
}
