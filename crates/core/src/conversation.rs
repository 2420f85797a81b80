//! Conversation message records and text normalization

use serde::{Deserialize, Serialize};

/// A single message supplied by the caller
///
/// A missing `text` field is treated as an empty string, never as an
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl MessageRecord {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: Some(sender.into()),
            text: text.into(),
        }
    }
}

/// Normalize a conversation for matching: lower-case every message text
/// and join with single spaces.
pub fn normalize_messages(messages: &[MessageRecord]) -> String {
    messages
        .iter()
        .map(|m| m.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
