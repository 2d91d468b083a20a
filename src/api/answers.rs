//! Answer statistics endpoint
//!
//! - `GET /api/answers/stats` — size of the current past-answer set

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::AppState;
use super::error::ApiError;

pub(super) fn routes() -> Router<AppState> {
    Router::new().route("/api/answers/stats", get(stats))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    answers_length: usize,
}

async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let answers = state.answers.get().await?;
    Ok(Json(StatsResponse {
        answers_length: answers.len(),
    }))
}
