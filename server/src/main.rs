mod config;
mod detect;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let detector = detect::HttpDetector::new(&config.upstream).expect("detect client init failed");
    tracing::info!(
        upstream = detector.base_url(),
        request_timeout_secs = config.upstream.timeouts.request_secs,
        "detect relay configured"
    );

    let state = state::AppState::new(Arc::new(detector));

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "language detector listening");
    axum::serve(listener, app).await.expect("server failed");
}
