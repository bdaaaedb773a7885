mod assistant;
mod config;
mod errors;
mod llm_client;
mod models;
mod render;
mod routes;
mod session;
mod state;
mod upload;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::ResumeAssistant;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::{MemorySessionStore, RedisSessionStore, SessionStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generative client and the assistant facade over it
    let llm = LlmClient::new(config.gemini_api_url.clone(), config.gemini_api_key.clone());
    info!("LLM client initialized (endpoint: {})", llm.api_url());
    let assistant = ResumeAssistant::new(Arc::new(llm));

    // Initialize session persistence
    let sessions: Arc<dyn SessionStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.clone())?;
            info!("Session store: redis");
            Arc::new(RedisSessionStore::new(client))
        }
        None => {
            info!("Session store: in-memory (REDIS_URL not set)");
            Arc::new(MemorySessionStore::default())
        }
    };

    let state = AppState {
        assistant,
        sessions,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
