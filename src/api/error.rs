//! Error responses
//!
//! Every failure surfaces as `{"error": "<reason>"}`: client mistakes as
//! 400, a failed answers refresh as 502.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::answers::AnswersError;

/// Error returned by request handlers
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request input; produced before the cache or engine runs
    BadRequest(String),
    /// The past answers could not be refreshed
    Upstream(AnswersError),
}

impl ApiError {
    pub(crate) fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest(reason.into())
    }
}

impl From<AnswersError> for ApiError {
    fn from(err: AnswersError) -> Self {
        Self::Upstream(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason),
            Self::Upstream(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
