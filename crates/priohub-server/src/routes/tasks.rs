//! Task listing, ranking and summary endpoints.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use priohub_core::{
    normalize, score_all, select_blockers, sort_by_priority_descending, ProjectSummary,
};

use crate::error::ApiError;
use crate::routes::{fetch_board, fetch_tasks};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks))
        .route("/api/next-task", get(next_task))
        .route("/api/summary", get(summary))
        .route("/api/blockers", get(blockers))
}

/// All tasks with scores attached, highest priority first.
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let (cards, lists) = fetch_board(&state).await;

    if cards.is_empty() {
        return Ok(Json(json!({
            "success": false,
            "error": "No cards found. Check board credentials.",
            "cards_count": 0,
        })));
    }

    let mut tasks = normalize(&cards, &lists);
    score_all(&mut tasks, Utc::now());
    sort_by_priority_descending(&mut tasks);

    Ok(Json(json!({
        "success": true,
        "total_tasks": tasks.len(),
        "tasks": tasks,
    })))
}

/// The single highest-priority task.
async fn next_task(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let mut tasks = fetch_tasks(&state).await;

    if tasks.is_empty() {
        return Ok(Json(json!({
            "success": true,
            "message": "No tasks yet",
        })));
    }

    score_all(&mut tasks, Utc::now());
    sort_by_priority_descending(&mut tasks);
    let top = &tasks[0];

    let message = format!(
        "Top priority: {} (score {}/100)",
        top.title,
        top.priority_score.unwrap_or(0.0)
    );

    Ok(Json(json!({
        "success": true,
        "task": top,
        "message": message,
    })))
}

/// Counts by status plus completion rate.
async fn summary(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let tasks = fetch_tasks(&state).await;
    let summary = ProjectSummary::from_tasks(&tasks);

    Ok(Json(json!({
        "success": true,
        "summary": summary,
    })))
}

/// Tasks flagged as blocking other work, by freshly computed score.
async fn blockers(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let tasks = fetch_tasks(&state).await;
    let blockers = select_blockers(&tasks, Utc::now());

    Ok(Json(json!({
        "success": true,
        "count": blockers.len(),
        "blockers": blockers,
    })))
}
