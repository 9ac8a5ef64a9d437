//! Message recording and recipient-aware listing.

/// Endpoint handlers
pub mod handlers;

/// Pure visibility and limit logic
pub mod visibility;
