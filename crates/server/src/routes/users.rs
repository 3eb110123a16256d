use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use common::types::StatusOk;
use service::{
    domain::user::{UserCreateInput, UserDetail, UserListItem, UserUpdateInput},
    pagination::{Page, PageQuery},
};
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{ApiJson, ApiPath, ApiQuery},
    state::AppState,
};

#[utoipa::path(get, path = "/user/", tag = "user",
    params(("page" = Option<String>, Query, description = "1-based page number")),
    responses((status = 200, body = crate::openapi::UserPageDoc)))]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<PageQuery>,
) -> Result<Json<Page<UserListItem>>, ApiError> {
    let page = state.users.list(q.page.as_deref()).await?;
    info!(count = page.items.len(), total = page.total, "list users");
    Ok(Json(page))
}

#[utoipa::path(get, path = "/user/{id}/", tag = "user",
    params(("id" = i32, Path, description = "User id")),
    responses((status = 200, body = crate::openapi::UserDoc), (status = 404, body = crate::openapi::ErrorDoc)))]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<UserDetail>, ApiError> {
    Ok(Json(state.users.get(id).await?))
}

#[utoipa::path(post, path = "/user/create/", tag = "user",
    request_body = crate::openapi::UserCreateDoc,
    responses((status = 201, body = crate::openapi::UserDoc), (status = 400, body = crate::openapi::ErrorDoc),
        (status = 409, body = crate::openapi::ErrorDoc)))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UserCreateInput>,
) -> Result<(StatusCode, Json<UserDetail>), ApiError> {
    let created = state.users.create(input).await?;
    info!(id = created.id, username = %created.username, "created user");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(patch, path = "/user/{id}/update/", tag = "user",
    params(("id" = i32, Path, description = "User id")),
    request_body = crate::openapi::UserUpdateDoc,
    responses((status = 200, body = crate::openapi::UserDoc), (status = 404, body = crate::openapi::ErrorDoc)))]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<UserUpdateInput>,
) -> Result<Json<UserDetail>, ApiError> {
    Ok(Json(state.users.update(id, input).await?))
}

#[utoipa::path(delete, path = "/user/{id}/delete/", tag = "user",
    params(("id" = i32, Path, description = "User id")),
    responses((status = 200, body = crate::openapi::StatusDoc), (status = 404, body = crate::openapi::ErrorDoc)))]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<StatusOk>, ApiError> {
    state.users.delete(id).await?;
    Ok(Json(StatusOk::default()))
}
