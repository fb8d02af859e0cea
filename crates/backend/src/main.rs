//! Chatbot backend - HTTP façade over a chat-completion API
//!
//! Responsibilities:
//! - Accepts summarize/answer requests as JSON over HTTP
//! - Builds the prompt for each operation
//! - Relays the completion API's text back to the caller

use backend::config::BackendConfig;
use backend::routes;
use clap::Parser;
use common::LlmClient;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    info!("Chatbot backend starting...");

    let config = BackendConfig::parse();

    info!("Configuration loaded:");
    info!("  HTTP: {}:{}", config.http_host, config.http_port);
    info!("  Model: {}", config.openai_model);
    info!("  Completion API: {}", config.openai_base_url);
    info!("  CORS origin: {}", config.cors_origin);

    let llm_client = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        config.openai_base_url.clone(),
    );

    let cors = routes::cors_layer(&config.cors_origin)?;
    let app = routes::router(Arc::new(llm_client)).layer(cors);

    let addr = format!("{}:{}", config.http_host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
