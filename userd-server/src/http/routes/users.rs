//! User endpoints
//!
//! | Method | Path            | Success                      |
//! |--------|-----------------|------------------------------|
//! | GET    | /users          | 200, JSON array              |
//! | POST   | /user           | 201, created user            |
//! | GET    | /user/{id}      | 200, user                    |
//! | PUT    | /user/{id}      | 200, user as sent            |
//! | DELETE | /user/{id}      | 200, `{"result":"success"}`  |

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::UserId;
use crate::http::server::AppState;
use crate::models::{ListParams, ListWindow, User};

/// Delete confirmation body
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

/// Decode the first JSON value of the body; trailing bytes are ignored.
fn decode_user(body: &[u8]) -> Option<User> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<User>()
        .next()?
        .inspect_err(|e| tracing::debug!(error = %e, "rejected user payload"))
        .ok()
}

/// GET /users?count=&start= - bounded window of users.
///
/// The query never rejects: undecodable input counts as absent.
async fn list_users(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<User>>, ApiError> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let window = ListWindow::from(ListParams::from_pairs(pairs));
    let users = state.users.list(window.offset(), window.limit()).await?;
    Ok(Json(users))
}

/// POST /user - create a user; any client-sent id is replaced
async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = decode_user(&body).ok_or_else(|| ApiError::bad_request("Invalid Payload"))?;
    let user = state.users.create(user.with_id(0)).await?;

    tracing::info!(user.id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /user/{id} - fetch a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    let user = state.users.get(id).await?;
    Ok(Json(user))
}

/// PUT /user/{id} - overwrite name/age; the path id wins over the body id.
///
/// Echoes the record as sent. A missing row is not reported.
async fn update_user(
    State(state): State<Arc<AppState>>,
    id: Result<UserId, ApiError>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let UserId(id) = id.map_err(|_| ApiError::bad_request("Invalid User ID"))?;
    let user = decode_user(&body)
        .ok_or_else(|| ApiError::bad_request("Invalid payload"))?
        .with_id(id);

    state.users.update(&user).await?;
    Ok(Json(user))
}

/// DELETE /user/{id} - remove a user.
///
/// Storage failures are reported as 400 here, unlike the other handlers.
async fn delete_user(
    State(state): State<Arc<AppState>>,
    id: Result<UserId, ApiError>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let UserId(id) = id.map_err(|_| ApiError::bad_request("Invalid Id"))?;

    state.users.delete(id).await.map_err(|e| {
        tracing::warn!(user.id = id, error = %e, "delete failed");
        ApiError::bad_request("Invalid payload")
    })?;

    Ok(Json(DeleteResponse { result: "success" }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route("/user", post(create_user))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
