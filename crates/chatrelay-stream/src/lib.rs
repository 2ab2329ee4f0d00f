//! chatrelay-stream - incremental streaming-response decoder
//!
//! This crate provides:
//! - Line classification for the dual wire framing (SSE-prefixed and bare JSON)
//! - `StreamDecoder`: chunk-by-chunk decoding with a cross-chunk carry buffer
//! - `Turn`: the caller-side reducer that accumulates a streamed reply
//! - `decode_stream`: an async adapter from a byte stream to an event stream
//!
//! The decoder is transport-agnostic: it consumes raw byte chunks in arrival
//! order and yields typed events in line order. Accumulation belongs to the
//! caller.

pub mod decoder;
pub mod error;
pub mod frame;
pub mod reader;
pub mod turn;

pub use decoder::StreamDecoder;
pub use error::StreamError;
pub use frame::RawFrame;
pub use reader::decode_stream;
pub use turn::Turn;
