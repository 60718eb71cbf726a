//! User HTTP Handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{
    CreateUser, DeleteAllUsers, DeleteUser, GetUser, ListUsers, UpdateUser,
};
use crate::domain::user::{validate_create, validate_update};
use crate::infrastructure::http::dto::{
    ApiResponse, CreatedResponse, UserResponse, UsersResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extractors::{JsonFields, ListQuery, UserIdParam};
use crate::infrastructure::http::state::AppState;

/// `POST /create`
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonFields(fields): JsonFields,
) -> Result<(StatusCode, Json<ApiResponse<CreatedResponse>>), ApiError> {
    let user = validate_create(&fields)?;

    let id = state
        .create_user_handler
        .handle(CreateUser { user })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreatedResponse { id })),
    ))
}

/// `GET /get/:id`
///
/// 找不到时返回空列表，不返回 404
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    UserIdParam(user_id): UserIdParam,
) -> Result<Json<ApiResponse<UsersResponse>>, ApiError> {
    let users = state.get_user_handler.handle(GetUser { user_id }).await?;

    Ok(Json(ApiResponse::success(UsersResponse::from(users))))
}

/// `GET /get?role=`
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    ListQuery(params): ListQuery,
) -> Result<Json<ApiResponse<UsersResponse>>, ApiError> {
    let users = state
        .list_users_handler
        .handle(ListUsers { role: params.role })
        .await?;

    Ok(Json(ApiResponse::success(UsersResponse::from(users))))
}

/// `PATCH /update/:id`
///
/// 先校验路径 ID，再校验请求体
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    UserIdParam(user_id): UserIdParam,
    JsonFields(fields): JsonFields,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let patch = validate_update(&fields)?;

    let user = state
        .update_user_handler
        .handle(UpdateUser { user_id, patch })
        .await?;

    Ok(Json(ApiResponse::success(UserResponse::from(user))))
}

/// `DELETE /delete/:id`
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    UserIdParam(user_id): UserIdParam,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .delete_user_handler
        .handle(DeleteUser { user_id })
        .await?;

    Ok(Json(ApiResponse::success(UserResponse::from(user))))
}

/// `DELETE /delete`
pub async fn delete_all_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .delete_all_users_handler
        .handle(DeleteAllUsers)
        .await?;

    Ok(Json(ApiResponse::ok()))
}
