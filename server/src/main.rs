#![recursion_limit = "256"]

mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let app = routes::app().expect("leptos app init failed");

    tracing::info!(
        backend = %summarizer_client::config::api_base_url(),
        "browser bundle targets summarizer backend"
    );

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "summarizer frontend listening");
    axum::serve(listener, app).await.expect("server failed");
}
