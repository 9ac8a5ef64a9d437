//! Participant liveness updates.

/// Endpoint handlers
pub mod handlers;
