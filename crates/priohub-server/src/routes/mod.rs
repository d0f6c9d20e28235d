//! Route assembly.

mod health;
mod insights;
mod tasks;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use priohub_core::{normalize, BoardList, Card};

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(tasks::router())
        .merge(insights::router())
        .fallback(not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "Endpoint not found",
        })),
    )
}

/// Fetch cards and lists, treating any board failure as an empty board.
///
/// This is the explicit soft-failure policy of the adapter boundary: typed
/// errors are logged and downgraded to empty collections so a broken board
/// never takes a request down.
pub(crate) async fn fetch_board(state: &AppState) -> (Vec<Card>, Vec<BoardList>) {
    let (cards, lists) = tokio::join!(state.board.fetch_cards(), state.board.fetch_lists());

    let cards = cards.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "card fetch failed, treating board as empty");
        Vec::new()
    });
    let lists = lists.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "list fetch failed, statuses will fall back");
        Vec::new()
    });

    (cards, lists)
}

/// Fetch and normalize in one step for handlers that want tasks directly.
pub(crate) async fn fetch_tasks(state: &AppState) -> Vec<priohub_core::Task> {
    let (cards, lists) = fetch_board(state).await;
    normalize(&cards, &lists)
}
