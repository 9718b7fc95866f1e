use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::use_cases::IngestImageUseCase;

/// Multipart form field carrying the image
pub const IMAGE_FIELD: &str = "image";

/// POST /upload
/// Ingest the `image` form field and redirect (302) to its URL.
///
/// The part's own `Content-Type` and file name are ignored; the type is
/// sniffed from the bytes.
pub async fn upload_handler(
    State(use_case): State<Arc<IngestImageUseCase>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let bytes = field.bytes().await?;
        let image = use_case.execute(&bytes).await?;

        return Ok((StatusCode::FOUND, [(header::LOCATION, image.location())]).into_response());
    }

    Err(ApiError::bad_request(format!(
        "Missing form field: {}",
        IMAGE_FIELD
    )))
}
