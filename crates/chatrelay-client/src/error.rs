//! Error types for the relay client.

use chatrelay_stream::StreamError;
use thiserror::Error;

/// Client-side error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// The relay answered with a non-success status.
    #[error("relay error {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Stream(#[from] StreamError),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
