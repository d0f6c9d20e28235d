//! Advisory-text endpoints backed by the insight requester.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use priohub_core::insight::short_diagnostic;

use crate::error::ApiError;
use crate::routes::fetch_tasks;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/risk", get(risk))
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    task_id: String,
}

/// Advisory insight for one task, looked up by id.
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Value>, ApiError> {
    let tasks = fetch_tasks(&state).await;

    let task = tasks
        .iter()
        .find(|t| t.id == request.task_id)
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    // Soft failure: an unreachable or confused model yields a short
    // diagnostic in place of the analysis, never a failed request.
    let analysis = match state.insight.analyze_task(task, &tasks).await {
        Ok(text) => text,
        Err(err) => format!("Could not analyze: {}", short_diagnostic(&err)),
    };

    Ok(Json(json!({
        "success": true,
        "task_id": task.id,
        "task_title": task.title,
        "analysis": analysis,
    })))
}

/// Project-level risk call over the full task set.
async fn risk(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let tasks = fetch_tasks(&state).await;

    if tasks.is_empty() {
        return Ok(Json(json!({
            "success": true,
            "message": "No tasks to analyze",
        })));
    }

    let risk_analysis = match state.insight.predict_project_risk(&tasks, Utc::now()).await {
        Ok(text) => text,
        Err(err) => format!("Could not predict: {}", short_diagnostic(&err)),
    };

    Ok(Json(json!({
        "success": true,
        "risk_analysis": risk_analysis,
    })))
}
