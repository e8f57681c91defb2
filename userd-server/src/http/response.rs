//! Uniform JSON response envelopes

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Body of every error response: `{"error": "<message>"}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Serialize `payload` as JSON with the given status.
pub fn respond_with_json<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(payload)).into_response()
}

/// Error envelope with the given status.
pub fn respond_with_error(status: StatusCode, message: impl Into<String>) -> Response {
    respond_with_json(
        status,
        ErrorBody {
            error: message.into(),
        },
    )
}
