//! Error types for stream decoding.

use thiserror::Error;

/// Errors surfaced while consuming a streamed turn.
///
/// Malformed frames are not errors; they are skipped during decoding. Only
/// the transport itself can fail a stream.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("transport error: {0}")]
    Transport(String),
}
