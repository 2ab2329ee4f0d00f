use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Error response on the relay surface: `{"error": <message>}` with the
/// backend's status where one is available, else 500. Messages are fixed
/// per endpoint; backend detail is logged, never forwarded.
#[derive(Debug)]
pub struct RelayError {
    status: StatusCode,
    message: &'static str,
}

impl RelayError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
