//! Task-board adapter -- Trello REST client.
//!
//! The client reports failures as typed [`BoardError`]s and never recovers
//! internally; the HTTP boundary decides to treat a failed fetch as an empty
//! board. A single request timeout applies, with no retries.

mod types;

pub use types::{BoardList, Card, CardLabel};

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::TrelloConfig;
use crate::error::BoardError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only client for one Trello board.
pub struct TrelloClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_token: String,
    board_id: String,
}

impl TrelloClient {
    /// Build a client for the configured board.
    pub fn new(config: &TrelloConfig) -> Result<Self, BoardError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_token: config.api_token.clone(),
            board_id: config.board_id.clone(),
        })
    }

    /// Fetch every card on the board.
    pub async fn fetch_cards(&self) -> Result<Vec<Card>, BoardError> {
        self.get_board_resource("cards").await
    }

    /// Fetch every list (column) on the board.
    pub async fn fetch_lists(&self) -> Result<Vec<BoardList>, BoardError> {
        self.get_board_resource("lists").await
    }

    async fn get_board_resource<T: DeserializeOwned>(
        &self,
        resource: &str,
    ) -> Result<T, BoardError> {
        let url = format!("{}/boards/{}/{}", self.base_url, self.board_id, resource);
        tracing::debug!(resource, "fetching board resource");

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("token", self.api_token.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::Status(status));
        }

        response.json::<T>().await.map_err(BoardError::Decode)
    }
}
