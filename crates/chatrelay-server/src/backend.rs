//! Outbound HTTP client for the chat backend.

use chatrelay_models::{CreateSessionRequest, SendMessageRequest, UpdateTitleRequest};
use reqwest::Response;

/// One method per backend endpoint the relay forwards to. Responses come
/// back unparsed; status mapping is the handlers' concern.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn create_session(&self, body: &CreateSessionRequest) -> reqwest::Result<Response> {
        self.http
            .post(format!("{}/sessions", self.base_url))
            .json(body)
            .send()
            .await
    }

    pub async fn list_sessions(&self) -> reqwest::Result<Response> {
        self.http
            .get(format!("{}/sessions", self.base_url))
            .send()
            .await
    }

    pub async fn get_session(&self, session_id: i64) -> reqwest::Result<Response> {
        self.http
            .get(format!("{}/sessions/{}", self.base_url, session_id))
            .send()
            .await
    }

    pub async fn delete_session(&self, session_id: i64) -> reqwest::Result<Response> {
        self.http
            .delete(format!("{}/sessions/{}", self.base_url, session_id))
            .send()
            .await
    }

    pub async fn update_title(
        &self,
        session_id: i64,
        body: &UpdateTitleRequest,
    ) -> reqwest::Result<Response> {
        self.http
            .put(format!("{}/sessions/{}/title", self.base_url, session_id))
            .json(body)
            .send()
            .await
    }

    /// Open the streaming message request. The returned response body is the
    /// backend's live byte stream.
    pub async fn stream_message(
        &self,
        session_id: i64,
        body: &SendMessageRequest,
    ) -> reqwest::Result<Response> {
        self.http
            .post(format!("{}/sessions/{}/messages", self.base_url, session_id))
            .json(body)
            .send()
            .await
    }
}
