use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::use_cases::RetrieveImageUseCase;

/// One year, in seconds. Content-addressed images never change.
const CACHE_MAX_AGE_SECS: i64 = 365 * 24 * 60 * 60;

/// HTTP-date format (RFC 7231)
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// GET /{image}
/// Serve a stored image. `image` is `<id>` or `<id>.<ext>`; the response
/// type comes from the bytes, not the extension.
pub async fn image_handler(
    State(use_case): State<Arc<RetrieveImageUseCase>>,
    Path(image): Path<String>,
) -> Result<Response, ApiError> {
    let retrieved = use_case.execute_path(&image).await?;

    let expires = (Utc::now() + Duration::seconds(CACHE_MAX_AGE_SECS))
        .format(HTTP_DATE_FORMAT)
        .to_string();

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, retrieved.media_type.mime_type())
        .header(header::CONTENT_LENGTH, retrieved.bytes.len().to_string())
        .header(
            header::CACHE_CONTROL,
            format!("public, max-age={}, immutable", CACHE_MAX_AGE_SECS),
        )
        .header(header::EXPIRES, expires)
        .header(header::ETAG, format!("\"{}\"", retrieved.id))
        .body(Body::from(retrieved.bytes))
        .map_err(|e| ApiError::internal_error(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
