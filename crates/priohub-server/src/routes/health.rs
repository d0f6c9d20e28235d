//! Liveness endpoint.

use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "status": "OK",
        "message": "priohub is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
