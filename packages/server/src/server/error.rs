//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use event_crawler::FetchError;
use serde::Serialize;

/// Errors a handler can answer with.
#[derive(Debug)]
pub enum ApiError {
    /// The listing page could not be fetched
    Fetch(FetchError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Fetch(e) => {
                tracing::error!(error = %e, "Listing page fetch failed");
                (StatusCode::BAD_GATEWAY, "fetch_failed", e.to_string())
            }
        };

        (
            status,
            Json(ErrorBody {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}
