//! Async adapter from a raw byte stream to a decoded event stream.

use crate::decoder::StreamDecoder;
use crate::error::StreamError;
use chatrelay_models::StreamChunk;
use futures::{Stream, StreamExt, pin_mut};

/// Decode a byte stream into an ordered stream of events.
///
/// Chunks are processed strictly in arrival order, one chunk fully decoded
/// before the next read is issued. Reading stops at end-of-stream, after the
/// terminal event, or on the first transport error (surfaced as a terminal
/// `Err` item); the underlying stream is dropped on every exit path.
///
/// A stream that ends before its terminal event is not an error: the caller
/// observes an incomplete turn and a warning is logged.
pub fn decode_stream<S, B, E>(bytes: S) -> impl Stream<Item = Result<StreamChunk, StreamError>>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    async_stream::stream! {
        let mut decoder = StreamDecoder::new();
        pin_mut!(bytes);

        while let Some(chunk) = bytes.next().await {
            let chunk = match chunk {
                Ok(bytes) => bytes,
                Err(err) => {
                    yield Err(StreamError::Transport(err.to_string()));
                    return;
                }
            };

            for event in decoder.push(chunk.as_ref()) {
                yield Ok(event);
            }
            if decoder.saw_terminal() {
                return;
            }
        }

        for event in decoder.finish() {
            yield Ok(event);
        }
        if !decoder.saw_terminal() {
            tracing::warn!("stream ended without a terminal frame");
        }
    }
}
