use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `GEMINI_API_KEY` was not configured at startup.
    pub llm: Option<LlmClient>,
}
