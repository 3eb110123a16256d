use axum::{extract::State, Json};
use service::domain::location::LocationView;

use crate::{errors::ApiError, extract::ApiPath, state::AppState};

#[utoipa::path(get, path = "/location/", tag = "location",
    responses((status = 200, body = [crate::openapi::LocationDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<LocationView>>, ApiError> {
    Ok(Json(state.locations.list().await?))
}

#[utoipa::path(get, path = "/location/{id}/", tag = "location",
    params(("id" = i32, Path, description = "Location id")),
    responses((status = 200, body = crate::openapi::LocationDoc), (status = 404, body = crate::openapi::ErrorDoc)))]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<LocationView>, ApiError> {
    Ok(Json(state.locations.get(id).await?))
}
