//! Participant registration and listing.

/// Endpoint handlers
pub mod handlers;
