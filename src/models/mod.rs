//! Stored document shapes.

/// Chat message document
pub mod message;

/// Participant document
pub mod participant;

pub use message::{Message, MessageKind, BROADCAST_RECIPIENT};
pub use participant::Participant;
