pub mod error;
pub mod sessions;
pub mod stream;

use crate::backend::BackendClient;
use crate::middleware::logging::log_request;
use axum::{
    Router,
    http::{Method, header},
    routing::{get, post, put},
};
use error::RelayError;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(serde::Serialize)]
struct Health {
    status: String,
}

async fn health() -> axum::Json<Health> {
    axum::Json(Health {
        status: "chatrelay is working!".to_string(),
    })
}

pub fn router(backend: Arc<BackendClient>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route(
            "/sessions",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route(
            "/sessions/{id}",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route("/sessions/{id}/title", put(sessions::update_session_title))
        .route(
            "/sessions/{id}/messages/stream",
            post(stream::send_message_stream),
        )
        .layer(axum::middleware::from_fn(log_request))
        .layer(cors)
        .with_state(backend)
}

/// Map a non-success backend response to the relay's fixed error payload.
/// The backend's own body is logged and discarded, never forwarded.
pub(crate) async fn backend_failure(
    response: reqwest::Response,
    message: &'static str,
) -> RelayError {
    let status = response.status();
    let detail = response.text().await.unwrap_or_default();
    tracing::error!(%status, detail = %detail, "{}", message);
    RelayError::new(status, message)
}

/// Map a transport-level failure (backend unreachable, connection dropped,
/// undecodable body) to a generic 500.
pub(crate) fn backend_unreachable(err: reqwest::Error) -> RelayError {
    tracing::error!(error = %err, "backend request failed");
    RelayError::internal()
}
