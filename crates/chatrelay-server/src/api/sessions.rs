//! Session passthrough endpoints.
//!
//! Each handler forwards to the backend, relays a successful body as typed
//! JSON, and maps failures to the fixed per-endpoint error message with the
//! backend's status.

use crate::api::error::RelayError;
use crate::api::{backend_failure, backend_unreachable};
use crate::backend::BackendClient;
use axum::{
    Json,
    extract::{Path, State},
};
use chatrelay_models::{
    ChatSession, ChatSessionSummary, CreateSessionRequest, SuccessAck, UpdateTitleRequest,
};
use std::sync::Arc;

// POST /sessions
pub async fn create_session(
    State(backend): State<Arc<BackendClient>>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<ChatSession>, RelayError> {
    let response = backend
        .create_session(&request)
        .await
        .map_err(backend_unreachable)?;
    if !response.status().is_success() {
        return Err(backend_failure(response, "Failed to create session").await);
    }
    let session = response.json().await.map_err(backend_unreachable)?;
    Ok(Json(session))
}

// GET /sessions
pub async fn list_sessions(
    State(backend): State<Arc<BackendClient>>,
) -> Result<Json<Vec<ChatSessionSummary>>, RelayError> {
    let response = backend.list_sessions().await.map_err(backend_unreachable)?;
    if !response.status().is_success() {
        return Err(backend_failure(response, "Failed to fetch sessions").await);
    }
    let sessions = response.json().await.map_err(backend_unreachable)?;
    Ok(Json(sessions))
}

// GET /sessions/{id}
pub async fn get_session(
    State(backend): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<ChatSession>, RelayError> {
    let response = backend.get_session(id).await.map_err(backend_unreachable)?;
    if !response.status().is_success() {
        return Err(backend_failure(response, "Failed to fetch session").await);
    }
    let session = response.json().await.map_err(backend_unreachable)?;
    Ok(Json(session))
}

// DELETE /sessions/{id}
pub async fn delete_session(
    State(backend): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessAck>, RelayError> {
    let response = backend
        .delete_session(id)
        .await
        .map_err(backend_unreachable)?;
    if !response.status().is_success() {
        return Err(backend_failure(response, "Failed to delete session").await);
    }
    Ok(Json(SuccessAck { success: true }))
}

// PUT /sessions/{id}/title
pub async fn update_session_title(
    State(backend): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTitleRequest>,
) -> Result<Json<SuccessAck>, RelayError> {
    let response = backend
        .update_title(id, &request)
        .await
        .map_err(backend_unreachable)?;
    if !response.status().is_success() {
        return Err(backend_failure(response, "Failed to update session title").await);
    }
    Ok(Json(SuccessAck { success: true }))
}
