use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Every handler failure, rendered as `{"error": ...}` with a matching status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    UnsupportedMediaType(String),
    #[error("Not found")]
    NotFound,
    #[error("Location no found")]
    LocationNotFound,
    #[error("{0}")]
    Conflict(String),
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::NotFound | ApiError::LocationNotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::BadRequest(msg),
            ServiceError::Model(models::errors::ModelError::Validation(msg)) => ApiError::BadRequest(msg),
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::LocationNotFound(_) => ApiError::LocationNotFound,
            ServiceError::Conflict(msg) => ApiError::Conflict(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        match r {
            JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType(r.body_text()),
            _ => ApiError::BadRequest(r.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self { ApiError::BadRequest(r.body_text()) }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self { ApiError::NotFound }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(detail) = &self {
            error!(error = %detail, "request failed");
        }
        (status, Json(serde_json::json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        assert_eq!(ApiError::from(ServiceError::not_found("user")).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(ServiceError::Validation("bad".into())).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(ServiceError::Conflict("dup".into())).status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::from(ServiceError::Db("boom".into())).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(ApiError::NotFound.to_string(), "Not found");
        assert_eq!(ApiError::from(ServiceError::LocationNotFound("X".into())).to_string(), "Location no found");
        assert_eq!(ApiError::Internal("secret detail".into()).to_string(), "Internal server error");
    }
}
