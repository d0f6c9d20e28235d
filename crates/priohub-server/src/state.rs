//! Shared, read-only request state.

use std::sync::Arc;

use priohub_core::{Config, GeminiClient, TrelloClient};

/// Clients handed to every handler. Cloning is cheap; the inner clients are
/// never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<TrelloClient>,
    pub insight: Arc<GeminiClient>,
}

impl AppState {
    /// Build both clients from the process configuration.
    pub fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(AppState {
            board: Arc::new(TrelloClient::new(&config.trello)?),
            insight: Arc::new(GeminiClient::new(&config.gemini)?),
        })
    }
}
