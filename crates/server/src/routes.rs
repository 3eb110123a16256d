pub mod ads;
pub mod categories;
pub mod locations;
pub mod users;

use axum::{
    routing::{delete, get, patch, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{errors::ApiError, openapi::ApiDoc, state::AppState};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Build the application router with CORS and request tracing.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let category_routes = Router::new()
        .route("/cat/", get(categories::list))
        .route("/cat/create/", post(categories::create))
        .route("/cat/:id/", get(categories::get))
        .route("/cat/:id/update/", patch(categories::update))
        .route("/cat/:id/delete/", delete(categories::delete));

    let user_routes = Router::new()
        .route("/user/", get(users::list))
        .route("/user/create/", post(users::create))
        .route("/user/:id/", get(users::get))
        .route("/user/:id/update/", patch(users::update))
        .route("/user/:id/delete/", delete(users::delete));

    let ad_routes = Router::new()
        .route("/ad/", get(ads::list))
        .route("/ad/create/", post(ads::create))
        .route("/ad/:id/", get(ads::get))
        .route("/ad/:id/update/", patch(ads::update))
        .route("/ad/:id/delete/", delete(ads::delete));

    let location_routes = Router::new()
        .route("/location/", get(locations::list))
        .route("/location/:id/", get(locations::get));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(category_routes)
        .merge(user_routes)
        .merge(ad_routes)
        .merge(location_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
