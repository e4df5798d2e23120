//! User handlers.
//!
//! Each handler validates (through its extractors), dispatches to the
//! [`UserController`](momo_service::UserController) in state, and shapes
//! the result into `{ "data": ... }`. `None`/`false` from the controller
//! becomes 404.

use axum::Json;
use axum::extract::State;

use momo_core::error::AppError;
use momo_core::types::UserId;
use momo_entity::{Comment, Like, Post};

use crate::dto::request::UserPayload;
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{IdPath, ValidatedJson};
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

fn user_not_found(id: UserId) -> AppError {
    AppError::not_found(format!("User {id} not found"))
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    let users = state.users.get_users().await?;
    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<UserId>,
) -> ApiResult<UserResponse> {
    let user = state
        .users
        .get_user(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> ApiResult<UserResponse> {
    let user = state.users.create_user(payload.into()).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<UserId>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> ApiResult<UserResponse> {
    let user = state
        .users
        .update_user(id, payload.into())
        .await?
        .ok_or_else(|| user_not_found(id))?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<UserId>,
) -> ApiResult<MessageResponse> {
    if !state.users.delete_user(id).await? {
        return Err(user_not_found(id).into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted".to_string(),
    })))
}

/// GET /api/users/{id}/posts
pub async fn list_user_posts(
    State(state): State<AppState>,
    IdPath(id): IdPath<UserId>,
) -> ApiResult<Vec<Post>> {
    let posts = state
        .users
        .get_user_posts(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    Ok(Json(ApiResponse::ok(posts)))
}

/// GET /api/users/{id}/comments
pub async fn list_user_comments(
    State(state): State<AppState>,
    IdPath(id): IdPath<UserId>,
) -> ApiResult<Vec<Comment>> {
    let comments = state
        .users
        .get_user_comments(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    Ok(Json(ApiResponse::ok(comments)))
}

/// GET /api/users/{id}/likes
pub async fn list_user_likes(
    State(state): State<AppState>,
    IdPath(id): IdPath<UserId>,
) -> ApiResult<Vec<Like>> {
    let likes = state
        .users
        .get_user_likes(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    Ok(Json(ApiResponse::ok(likes)))
}
