//! Streaming wire chunk types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

/// Routing diagnostic for one candidate model.
///
/// `score` is the router's raw score (typically 0-1); the grade fields are
/// display hints and are not enforced numerically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number")]
    pub grade_value: Option<i64>,
}

/// One decoded unit of the streaming response.
///
/// `model_used` and `routing_scores` are out-of-band metadata set at most
/// once per turn, typically on the first or last chunk. `is_finished` is
/// true exactly on the terminal chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StreamChunk {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_scores: Option<HashMap<String, ScoreEntry>>,
    #[serde(default)]
    pub is_finished: bool,
}

impl StreamChunk {
    /// A plain text fragment with no metadata.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model_used: None,
            routing_scores: None,
            is_finished: false,
        }
    }

    /// The terminal chunk of a turn.
    pub fn finished() -> Self {
        Self {
            content: String::new(),
            model_used: None,
            routing_scores: None,
            is_finished: true,
        }
    }
}
