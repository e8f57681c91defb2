//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Message used when no handler-specific one is mapped in.
const INVALID_USER_ID: &str = "Invalid user ID";

/// Extract and validate a user id (unsigned decimal) from the path.
///
/// Rejects with an `ApiError`, so failures keep the JSON error envelope.
/// Handlers needing their own message take `Result<UserId, ApiError>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a raw path segment.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok().map(Self)
    }
}

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "unreadable user id");
                ApiError::bad_request(INVALID_USER_ID)
            })?;

        Self::parse(&raw).ok_or_else(|| ApiError::bad_request(INVALID_USER_ID))
    }
}
