#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use chatrelay_server::{api, backend::BackendClient, config::RelayConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing logger
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chatrelay_server=debug".into()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting chatrelay server");

    let config = RelayConfig::load().expect("Failed to load relay config");
    let backend = Arc::new(BackendClient::new(&config.backend_url));
    tracing::info!(backend_url = %config.backend_url, "Forwarding to chat backend");

    let app = api::router(backend);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind relay address");

    tracing::info!("chatrelay running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
