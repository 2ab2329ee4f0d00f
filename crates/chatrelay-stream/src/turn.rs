//! Caller-side accumulation of a streamed turn.

use chatrelay_models::{ScoreEntry, StreamChunk};
use std::collections::HashMap;

/// Reducer over the decoded event sequence of one turn.
///
/// The decoder yields events; the transcript belongs to the caller. `Turn`
/// concatenates content fragments in delivery order, captures the first
/// occurrence of the out-of-band metadata, and latches the terminal flag.
#[derive(Debug, Clone, Default)]
pub struct Turn {
    pub content: String,
    pub model_used: Option<String>,
    pub routing_scores: Option<HashMap<String, ScoreEntry>>,
    /// True once the terminal event has been absorbed. A turn that ends
    /// with this still false came from a prematurely closed stream.
    pub finished: bool,
}

impl Turn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one decoded event into the accumulated turn.
    pub fn absorb(&mut self, chunk: &StreamChunk) {
        self.content.push_str(&chunk.content);
        if self.model_used.is_none() {
            self.model_used = chunk.model_used.clone();
        }
        if self.routing_scores.is_none() {
            self.routing_scores = chunk.routing_scores.clone();
        }
        if chunk.is_finished {
            self.finished = true;
        }
    }
}
