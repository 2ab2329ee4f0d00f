//! Chunk-by-chunk decoder for the streaming wire protocol.

use crate::frame::{self, RawFrame};
use chatrelay_models::StreamChunk;

/// Incremental decoder for one streamed turn.
///
/// Fed raw byte chunks in arrival order via [`push`](Self::push); yields
/// decoded events in line order. Carries the unterminated tail of the byte
/// stream across chunk boundaries, so a line (or a multi-byte UTF-8
/// sequence) split across two reads is reassembled before parsing.
///
/// One decoder per turn; not restartable.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    carry: Vec<u8>,
    saw_terminal: bool,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next chunk of bytes; returns the events decoded from every
    /// complete line it contains, in order.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<StreamChunk> {
        self.carry.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.carry.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.carry.drain(..=pos).collect();
            self.decode_line(&line, &mut events);
        }
        events
    }

    /// Drain the buffered tail at end-of-stream. A final frame is not
    /// required to carry a trailing newline.
    pub fn finish(&mut self) -> Vec<StreamChunk> {
        let tail = std::mem::take(&mut self.carry);
        let mut events = Vec::new();
        if !tail.is_empty() {
            self.decode_line(&tail, &mut events);
        }
        events
    }

    /// Whether the terminal (`is_finished`) event has been delivered.
    pub fn saw_terminal(&self) -> bool {
        self.saw_terminal
    }

    fn decode_line(&mut self, raw: &[u8], events: &mut Vec<StreamChunk>) {
        let line = String::from_utf8_lossy(raw);
        let payload = match frame::classify(&line) {
            RawFrame::Data(payload) => payload,
            RawFrame::Bare(payload) => payload,
            RawFrame::Ignored => return,
        };

        match serde_json::from_str::<StreamChunk>(payload) {
            Ok(event) => {
                if self.saw_terminal {
                    // The terminal event must be the last one delivered.
                    tracing::debug!("dropping frame after terminal event");
                    return;
                }
                if event.is_finished {
                    self.saw_terminal = true;
                }
                events.push(event);
            }
            Err(err) => {
                tracing::debug!(error = %err, "skipping malformed frame");
            }
        }
    }
}
