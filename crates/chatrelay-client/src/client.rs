//! HTTP client for the relay surface.

use crate::error::{ClientError, Result};
use chatrelay_models::{
    ChatSession, ChatSessionSummary, CreateSessionRequest, SendMessageRequest, StreamChunk,
    UpdateTitleRequest,
};
use chatrelay_stream::{Turn, decode_stream};
use futures::{StreamExt, pin_mut};
use reqwest::Response;

/// Client for the relay's HTTP surface
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChatClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a new chat session, optionally with a title.
    pub async fn create_session(&self, title: Option<&str>) -> Result<ChatSession> {
        let body = CreateSessionRequest {
            title: title.map(str::to_string),
        };
        let response = self
            .http
            .post(format!("{}/sessions", self.base_url))
            .json(&body)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// List all sessions, newest first.
    pub async fn list_sessions(&self) -> Result<Vec<ChatSessionSummary>> {
        let response = self
            .http
            .get(format!("{}/sessions", self.base_url))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Fetch one session with its full message history.
    pub async fn get_session(&self, session_id: i64) -> Result<ChatSession> {
        let response = self
            .http
            .get(format!("{}/sessions/{}", self.base_url, session_id))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn delete_session(&self, session_id: i64) -> Result<()> {
        let response = self
            .http
            .delete(format!("{}/sessions/{}", self.base_url, session_id))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn update_title(&self, session_id: i64, title: &str) -> Result<()> {
        let body = UpdateTitleRequest {
            title: title.to_string(),
        };
        let response = self
            .http
            .put(format!("{}/sessions/{}/title", self.base_url, session_id))
            .json(&body)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// Send a user message and consume the streamed reply.
    ///
    /// `on_event` fires once per decoded event, in delivery order, before
    /// the event is folded into the returned [`Turn`]. A turn whose
    /// `finished` flag is false came from a prematurely closed stream.
    pub async fn send_message<F>(
        &self,
        session_id: i64,
        content: &str,
        mut on_event: F,
    ) -> Result<Turn>
    where
        F: FnMut(&StreamChunk),
    {
        let body = SendMessageRequest {
            content: content.to_string(),
        };
        let response = self
            .http
            .post(format!(
                "{}/sessions/{}/messages/stream",
                self.base_url, session_id
            ))
            .json(&body)
            .send()
            .await?;
        let response = check(response).await?;

        let events = decode_stream(response.bytes_stream());
        pin_mut!(events);

        let mut turn = Turn::new();
        while let Some(event) = events.next().await {
            let event = event?;
            on_event(&event);
            turn.absorb(&event);
        }

        if !turn.finished {
            tracing::warn!(session_id, "streamed reply ended without a terminal frame");
        }
        Ok(turn)
    }
}

async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ClientError::Api { status, message })
}
