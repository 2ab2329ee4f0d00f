//! Chat session and message types mirrored from the backend.

use crate::stream_chunk::ScoreEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Single chat message in a session
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    #[ts(type = "number")]
    pub id: i64,
    #[ts(type = "number")]
    pub session_id: i64,
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_scores: Option<HashMap<String, ScoreEntry>>,
    pub created_at: DateTime<Utc>,
}

/// Chat session with its full message history
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatSession {
    #[ts(type = "number")]
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Session list entry: header fields plus a message count, no bodies
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatSessionSummary {
    #[ts(type = "number")]
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[ts(type = "number")]
    pub message_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_without_messages_defaults_to_empty() {
        let session: ChatSession = serde_json::from_str(
            r#"{"id":1,"title":"chat","created_at":"2025-03-01T12:00:00Z","updated_at":"2025-03-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert!(session.messages.is_empty());
    }

    #[test]
    fn role_uses_lowercase_wire_names() {
        let message: ChatMessage = serde_json::from_str(
            r#"{"id":7,"session_id":1,"role":"assistant","content":"hi","created_at":"2025-03-01T12:00:01Z"}"#,
        )
        .unwrap();
        assert_eq!(message.role, ChatRole::Assistant);
        assert!(message.model_used.is_none());
    }

    #[test]
    fn summary_carries_message_count() {
        let summary: ChatSessionSummary = serde_json::from_str(
            r#"{"id":2,"title":"chat","created_at":"2025-03-01T12:00:00Z","updated_at":"2025-03-02T09:30:00Z","message_count":4}"#,
        )
        .unwrap();
        assert_eq!(summary.message_count, 4);
    }
}
