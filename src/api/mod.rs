//! HTTP endpoints
//!
//! Thin axum handlers over the cache and the matching engine. Handlers
//! validate and normalize all inputs before touching either; validation
//! failures never trigger an answers fetch.

mod answers;
mod error;
mod guesses;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::answers::AnswerCache;
use crate::core::Word;

pub use error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The immutable guess corpus, loaded once at startup
    pub words: Arc<Vec<Word>>,
    /// The daily past-answers cache
    pub answers: AnswerCache,
}

/// Build the application router
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(guesses::routes())
        .merge(answers::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
