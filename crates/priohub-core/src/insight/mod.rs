//! Insight requester -- Gemini REST client.
//!
//! Produces opaque advisory prose from normalized tasks. Like the board
//! adapter, the client reports typed errors; the boundary turns them into a
//! short diagnostic string instead of failing the request.

mod prompt;
mod snapshot;

pub use prompt::{analyze_task_prompt, project_risk_prompt};
pub use snapshot::ProjectSnapshot;

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::config::GeminiConfig;
use crate::error::InsightError;
use crate::task::Task;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Length cap for the soft-failure diagnostic shown in place of an insight.
const DIAGNOSTIC_CHAR_LIMIT: usize = 100;

/// Client for the generative-text service.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Build a client for the configured model.
    pub fn new(config: &GeminiConfig) -> Result<Self, InsightError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Advisory prose for a single task.
    ///
    /// The full task set is part of the contract; the current prompt uses the
    /// task alone.
    pub async fn analyze_task(
        &self,
        task: &Task,
        _all_tasks: &[Task],
    ) -> Result<String, InsightError> {
        self.generate(&analyze_task_prompt(task)).await
    }

    /// Project-level risk summary from aggregate counts.
    pub async fn predict_project_risk(
        &self,
        tasks: &[Task],
        now: DateTime<Utc>,
    ) -> Result<String, InsightError> {
        let snapshot = ProjectSnapshot::from_tasks(tasks, now);
        self.generate(&project_risk_prompt(&snapshot)).await
    }

    async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "requesting insight");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsightError::Status(status));
        }

        let data: serde_json::Value = response.json().await?;
        data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| InsightError::Malformed("no candidate text in response".to_string()))
    }
}

/// Truncated error text for the soft-failure envelope.
pub fn short_diagnostic(err: &InsightError) -> String {
    err.to_string().chars().take(DIAGNOSTIC_CHAR_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> GeminiClient {
        GeminiClient::new(&GeminiConfig {
            api_key: "test-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
            base_url: base_url.to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn extracts_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::UrlEncoded("key".into(), "test-key".into()))
            .with_status(200)
            .with_body(
                r#"{"candidates": [{"content": {"parts": [{"text": "Low risk. Ship it."}]}}]}"#,
            )
            .create_async()
            .await;

        let task = Task::new("t1", "Fix importer");
        let text = client_for(&server.url())
            .analyze_task(&task, &[])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(text, "Low risk. Ship it.");
    }

    #[tokio::test]
    async fn missing_candidates_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let task = Task::new("t1", "Fix importer");
        let err = client_for(&server.url())
            .analyze_task(&task, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::Malformed(_)));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let task = Task::new("t1", "Fix importer");
        let err = client_for(&server.url())
            .analyze_task(&task, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::Status(_)));
    }

    #[test]
    fn diagnostic_is_capped_at_100_chars() {
        let err = InsightError::Malformed("x".repeat(500));
        assert_eq!(short_diagnostic(&err).chars().count(), 100);
    }
}
