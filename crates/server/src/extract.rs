//! Extractors whose rejections render as `ApiError` JSON bodies.
use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::ApiError;

/// JSON body; requires `Content-Type: application/json`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameters; an unparsable id answers 404.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Query string; rejections render as JSON 400s.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
