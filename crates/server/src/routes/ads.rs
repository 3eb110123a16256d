use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use common::types::StatusOk;
use service::{
    domain::ad::{AdCreateInput, AdUpdateInput, AdView},
    pagination::{Page, PageQuery},
};
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{ApiJson, ApiPath, ApiQuery},
    state::AppState,
};

#[utoipa::path(get, path = "/ad/", tag = "ad",
    params(("page" = Option<String>, Query, description = "1-based page number")),
    responses((status = 200, body = crate::openapi::AdPageDoc)))]
pub async fn list(State(state): State<AppState>, ApiQuery(q): ApiQuery<PageQuery>) -> Result<Json<Page<AdView>>, ApiError> {
    Ok(Json(state.ads.list(q.page.as_deref()).await?))
}

#[utoipa::path(get, path = "/ad/{id}/", tag = "ad",
    params(("id" = i32, Path, description = "Ad id")),
    responses((status = 200, body = crate::openapi::AdDoc), (status = 404, body = crate::openapi::ErrorDoc)))]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<AdView>, ApiError> {
    Ok(Json(state.ads.get(id).await?))
}

#[utoipa::path(post, path = "/ad/create/", tag = "ad",
    request_body = crate::openapi::AdCreateDoc,
    responses((status = 201, body = crate::openapi::AdDoc), (status = 400, body = crate::openapi::ErrorDoc)))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<AdCreateInput>,
) -> Result<(StatusCode, Json<AdView>), ApiError> {
    let created = state.ads.create(input).await?;
    info!(id = created.id, author = ?created.author, "created ad");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(patch, path = "/ad/{id}/update/", tag = "ad",
    params(("id" = i32, Path, description = "Ad id")),
    request_body = crate::openapi::AdUpdateDoc,
    responses((status = 200, body = crate::openapi::AdDoc), (status = 400, body = crate::openapi::ErrorDoc),
        (status = 404, body = crate::openapi::ErrorDoc)))]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<AdUpdateInput>,
) -> Result<Json<AdView>, ApiError> {
    Ok(Json(state.ads.update(id, input).await?))
}

#[utoipa::path(delete, path = "/ad/{id}/delete/", tag = "ad",
    params(("id" = i32, Path, description = "Ad id")),
    responses((status = 200, body = crate::openapi::StatusDoc), (status = 404, body = crate::openapi::ErrorDoc)))]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<StatusOk>, ApiError> {
    state.ads.delete(id).await?;
    Ok(Json(StatusOk::default()))
}
