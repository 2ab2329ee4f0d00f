//! Integration tests for the relay against a mocked chat backend.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chatrelay_server::{api, backend::BackendClient};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn relay_for(backend_url: &str) -> Router {
    api::router(Arc::new(BackendClient::new(backend_url)))
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn stream_relay_forwards_backend_bytes_verbatim() {
    let backend = MockServer::start().await;
    let wire = concat!(
        "data: {\"content\":\"Hel\",\"model_used\":\"gpt-4o\"}\n\n",
        "data: {\"content\":\"lo\"}\n\n",
        "data: {\"content\":\"\",\"is_finished\":true}\n\n",
    );
    Mock::given(method("POST"))
        .and(path("/sessions/1/messages"))
        .and(body_json(serde_json::json!({"content": "hi"})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(wire, "text/event-stream"))
        .mount(&backend)
        .await;

    let response = relay_for(&backend.uri())
        .oneshot(json_request(
            "POST",
            "/sessions/1/messages/stream",
            serde_json::json!({"content": "hi"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain"
    );
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-cache"
    );
    assert_eq!(body_string(response.into_body()).await, wire);
}

#[tokio::test]
async fn relayed_stream_decodes_end_to_end() {
    let backend = MockServer::start().await;
    let wire = concat!(
        "data: {\"content\":\"A\"}\n\n",
        "{\"content\":\"B\"}\n",
        ": keep-alive\n",
        "data: {\"content\":\"\",\"is_finished\":true}\n\n",
    );
    Mock::given(method("POST"))
        .and(path("/sessions/3/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(wire, "text/event-stream"))
        .mount(&backend)
        .await;

    let response = relay_for(&backend.uri())
        .oneshot(json_request(
            "POST",
            "/sessions/3/messages/stream",
            serde_json::json!({"content": "hi"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let mut decoder = chatrelay_stream::StreamDecoder::new();
    let mut events = decoder.push(&bytes);
    events.extend(decoder.finish());

    let contents: Vec<_> = events.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, ["A", "B", ""]);
    assert!(decoder.saw_terminal());
}

#[tokio::test]
async fn backend_error_status_maps_to_fixed_message() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions/1/messages"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&backend)
        .await;

    let response = relay_for(&backend.uri())
        .oneshot(json_request(
            "POST",
            "/sessions/1/messages/stream",
            serde_json::json!({"content": "hi"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_string(response.into_body()).await;
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body).unwrap(),
        serde_json::json!({"error": "Failed to send message"})
    );
    assert!(!body.contains("overloaded"));
}

#[tokio::test]
async fn unreachable_backend_maps_to_internal_error() {
    // Nothing listens here; the connection fails before any bytes move.
    let response = relay_for("http://127.0.0.1:9")
        .oneshot(json_request(
            "POST",
            "/sessions/1/messages/stream",
            serde_json::json!({"content": "hi"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response.into_body()).await;
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body).unwrap(),
        serde_json::json!({"error": "Internal server error"})
    );
}

#[tokio::test]
async fn create_session_passes_the_backend_session_through() {
    let backend = MockServer::start().await;
    let session = serde_json::json!({
        "id": 12,
        "title": "new chat",
        "created_at": "2025-03-01T12:00:00Z",
        "updated_at": "2025-03-01T12:00:00Z",
        "messages": []
    });
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(body_json(serde_json::json!({"title": "new chat"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&session))
        .mount(&backend)
        .await;

    let response = relay_for(&backend.uri())
        .oneshot(json_request(
            "POST",
            "/sessions",
            serde_json::json!({"title": "new chat"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    let relayed: chatrelay_models::ChatSession = serde_json::from_str(&body).unwrap();
    assert_eq!(relayed.id, 12);
    assert_eq!(relayed.title, "new chat");
    assert!(relayed.messages.is_empty());
}

#[tokio::test]
async fn list_sessions_returns_summaries() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 2,
                "title": "chat",
                "created_at": "2025-03-01T12:00:00Z",
                "updated_at": "2025-03-02T09:30:00Z",
                "message_count": 4
            }
        ])))
        .mount(&backend)
        .await;

    let response = relay_for(&backend.uri())
        .oneshot(
            Request::builder()
                .uri("/sessions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    let summaries: Vec<chatrelay_models::ChatSessionSummary> =
        serde_json::from_str(&body).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].message_count, 4);
}

#[tokio::test]
async fn missing_session_maps_to_404_with_generic_message() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sessions/42"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "no row"})),
        )
        .mount(&backend)
        .await;

    let response = relay_for(&backend.uri())
        .oneshot(
            Request::builder()
                .uri("/sessions/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response.into_body()).await;
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body).unwrap(),
        serde_json::json!({"error": "Failed to fetch session"})
    );
    assert!(!body.contains("no row"));
}

#[tokio::test]
async fn delete_and_title_update_return_success_acks() {
    let backend = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/sessions/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "deleted"})),
        )
        .mount(&backend)
        .await;
    Mock::given(method("PUT"))
        .and(path("/sessions/7/title"))
        .and(body_json(serde_json::json!({"title": "renamed"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "updated"})),
        )
        .mount(&backend)
        .await;

    let relay = relay_for(&backend.uri());

    let response = relay
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/sessions/7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response.into_body()).await,
        r#"{"success":true}"#
    );

    let response = relay
        .oneshot(json_request(
            "PUT",
            "/sessions/7/title",
            serde_json::json!({"title": "renamed"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response.into_body()).await,
        r#"{"success":true}"#
    );
}

#[tokio::test]
async fn health_endpoint_answers() {
    let response = relay_for("http://127.0.0.1:9")
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
