use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::middleware::{ApiError, ApiResult, AppState, AuthenticatedUser};
use crate::models::user::{CreateUserRequest, UserResponse};

pub async fn list_users(
    State(state): State<AppState>,
    axum::Extension(_auth_user): axum::Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    axum::Extension(_auth_user): axum::Extension<AuthenticatedUser>,
    Path(username): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .user_service
        .find_by_username(&username)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Could not find a user with username {}", username))
        })?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn create_user(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    if !auth_user.is_admin() {
        return Err(ApiError::Forbidden("Requires the admin role".to_string()));
    }

    let user = state
        .user_service
        .create_user(request.username, request.roles, auth_user.username())
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
