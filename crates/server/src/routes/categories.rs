use axum::{extract::State, http::StatusCode, Json};
use common::types::StatusOk;
use service::domain::category::{CategoryInput, CategoryView};
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{ApiJson, ApiPath},
    state::AppState,
};

#[utoipa::path(get, path = "/cat/", tag = "category",
    responses((status = 200, body = [crate::openapi::CategoryDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CategoryView>>, ApiError> {
    Ok(Json(state.categories.list().await?))
}

#[utoipa::path(get, path = "/cat/{id}/", tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    responses((status = 200, body = crate::openapi::CategoryDoc), (status = 404, body = crate::openapi::ErrorDoc)))]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<CategoryView>, ApiError> {
    Ok(Json(state.categories.get(id).await?))
}

#[utoipa::path(post, path = "/cat/create/", tag = "category",
    request_body = crate::openapi::CategoryInputDoc,
    responses((status = 201, body = crate::openapi::CategoryDoc), (status = 400, body = crate::openapi::ErrorDoc),
        (status = 409, body = crate::openapi::ErrorDoc)))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CategoryInput>,
) -> Result<(StatusCode, Json<CategoryView>), ApiError> {
    let created = state.categories.create(input).await?;
    info!(id = created.id, name = %created.name, "created category");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(patch, path = "/cat/{id}/update/", tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    request_body = crate::openapi::CategoryInputDoc,
    responses((status = 200, body = crate::openapi::CategoryDoc), (status = 404, body = crate::openapi::ErrorDoc)))]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<CategoryInput>,
) -> Result<Json<CategoryView>, ApiError> {
    Ok(Json(state.categories.update(id, input).await?))
}

#[utoipa::path(delete, path = "/cat/{id}/delete/", tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    responses((status = 200, body = crate::openapi::StatusDoc), (status = 404, body = crate::openapi::ErrorDoc)))]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<StatusOk>, ApiError> {
    state.categories.delete(id).await?;
    Ok(Json(StatusOk::default()))
}
