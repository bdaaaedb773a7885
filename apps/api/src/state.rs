use std::sync::Arc;

use crate::assistant::ResumeAssistant;
use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub assistant: ResumeAssistant,
    /// Redis-backed when `REDIS_URL` is set, in-process otherwise.
    pub sessions: Arc<dyn SessionStore>,
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    /// In-memory sessions and a fixed config around the given generator.
    pub fn for_tests(generator: Arc<dyn crate::llm_client::TextGenerator>) -> Self {
        AppState {
            assistant: ResumeAssistant::new(generator),
            sessions: Arc::new(crate::session::MemorySessionStore::default()),
            config: Config {
                gemini_api_key: "test-key".to_string(),
                gemini_api_url: "http://127.0.0.1:9/generate".to_string(),
                redis_url: None,
                portfolio_base_url: "https://folio.test".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
            },
        }
    }
}
