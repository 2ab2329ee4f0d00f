//! chatrelay-client - typed client for the relay surface
//!
//! One method per relay endpoint: session CRUD, title update, and
//! `send_message`, which consumes the streamed reply incrementally and
//! returns the accumulated [`Turn`](chatrelay_stream::Turn).

pub mod client;
pub mod error;

pub use client::ChatClient;
pub use error::ClientError;
