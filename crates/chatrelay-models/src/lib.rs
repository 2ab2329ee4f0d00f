//! Shared wire types for chatrelay
//!
//! This crate provides:
//! - Session and message types mirrored from the chat backend
//! - Streaming chunk types carried on the line-oriented wire protocol
//! - Request payloads accepted by the relay surface
//!
//! Everything here is serde-serialized with the backend's snake_case field
//! names and exported as TypeScript bindings for the browser client.

pub mod request;
pub mod session;
pub mod stream_chunk;

pub use request::{CreateSessionRequest, SendMessageRequest, SuccessAck, UpdateTitleRequest};
pub use session::{ChatMessage, ChatRole, ChatSession, ChatSessionSummary};
pub use stream_chunk::{ScoreEntry, StreamChunk};
