use crate::openai::OpenAiClient;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream OpenAI endpoints, built once at startup
    pub openai: Arc<OpenAiClient>,
}

impl AppState {
    pub fn new(openai: OpenAiClient) -> Self {
        Self {
            openai: Arc::new(openai),
        }
    }
}
