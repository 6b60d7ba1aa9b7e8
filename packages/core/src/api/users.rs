//! Endpoints backed by the user store.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use super::error::ApiResult;
use super::response::ApiResponse;
use super::state::AppState;
use crate::repository::User;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

/// `GET /db-check`: `1` when the database answers `SELECT 1`.
pub async fn db_check(State(state): State<AppState>) -> ApiResult<i64> {
    let one = state.users.check_connection().await?;
    Ok(ApiResponse::ok(one))
}

/// `GET /users/:id`
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<User> {
    let user = state.users.get_user(id).await?;
    Ok(ApiResponse::ok(user))
}

/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> ApiResult<User> {
    let user = state.users.create_user(&body.username).await?;
    Ok(ApiResponse::ok_with_message("Created", user))
}
