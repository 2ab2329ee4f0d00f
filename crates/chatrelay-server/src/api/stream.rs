//! Streaming message relay.

use crate::api::error::RelayError;
use crate::api::{backend_failure, backend_unreachable};
use crate::backend::BackendClient;
use axum::{
    Json,
    body::Body,
    extract::{Path, State},
    http::header,
    response::Response,
};
use chatrelay_models::SendMessageRequest;
use std::sync::Arc;

// POST /sessions/{id}/messages/stream
//
// Forwards the backend's byte stream verbatim: no re-framing, no content
// transformation, buffering limited to what the transport requires. Once
// forwarding has started the relay never alters, retries, or re-opens the
// stream; early termination is the decoder's concern.
pub async fn send_message_stream(
    State(backend): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Response, RelayError> {
    let upstream = backend
        .stream_message(id, &request)
        .await
        .map_err(backend_unreachable)?;
    if !upstream.status().is_success() {
        return Err(backend_failure(upstream, "Failed to send message").await);
    }

    Response::builder()
        .header(header::CONTENT_TYPE, "text/plain")
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::CONNECTION, "keep-alive")
        .body(Body::from_stream(upstream.bytes_stream()))
        .map_err(|err| {
            tracing::error!(error = %err, "failed to build stream response");
            RelayError::internal()
        })
}
