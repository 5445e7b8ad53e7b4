mod config;
mod credentials;
mod enhancer;
mod errors;
mod llm_client;
mod routes;
mod state;
mod ui;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::credentials::resolve_api_key;
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on a malformed PORT)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Prompt Enhancer v{}", env!("CARGO_PKG_VERSION"));

    // Resolve the API key once; absence is fine, the form will ask for it
    let configured_api_key = resolve_api_key(&config.secrets_path, &config.env_file);

    let llm = OpenAiClient::new(config.openai_base_url.clone());
    info!(
        "LLM client initialized (model: {}, base url: {})",
        llm_client::MODEL,
        config.openai_base_url
    );

    let state = AppState {
        llm: Arc::new(llm),
        configured_api_key,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
