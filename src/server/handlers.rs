//! Request handlers for the `/users` routes.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use super::error::ApiError;
use crate::models::{CreateUserRequest, CreatedUser, User, UserId};
use crate::store::UserStore;

pub async fn root() -> &'static str {
    "Hello World"
}

/// `POST /users`: decode the body regardless of `Content-Type` and store it.
pub async fn create_user(
    State(store): State<Arc<UserStore>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req: CreateUserRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejecting malformed user body");
        ApiError::BadRequest(e.to_string())
    })?;

    let id = store.insert(User::from(req))?;
    tracing::info!(id, "user created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{id}"))],
        Json(CreatedUser { id }),
    ))
}

/// `GET /users/{id}`
pub async fn get_user(
    State(store): State<Arc<UserStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    let user = store.get(id)?;
    tracing::debug!(id, "user fetched");
    Ok(Json(user))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    State(store): State<Arc<UserStore>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    store.delete(id)?;
    tracing::info!(id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<UserId>().map_err(|e| {
        tracing::warn!(raw, "rejecting non-integer user id");
        ApiError::BadRequest(format!("invalid user id {raw:?}: {e}"))
    })
}
