use serde::{Deserialize, Serialize};

/// Sentinel recipient meaning "all participants".
pub const BROADCAST_RECIPIENT: &str = "Todos";

/// Visibility class of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Public message, visible to everyone regardless of recipient.
    #[serde(rename = "message")]
    Public,
    /// Private message, visible only to sender and addressee.
    #[serde(rename = "private_message")]
    Private,
}

/// A recorded chat message. Immutable once stored.
///
/// `from` named a registered participant at write time; nothing in the store
/// enforces that afterwards. `time` is the wall-clock send time, formatted
/// `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub time: String,
}
