use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// One structured log line per request. Observability only; handlers never
/// branch on anything recorded here.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}
