use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::errors::ImageError;

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

// Convert use case errors to API errors

impl From<ImageError> for ApiError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::UnsupportedContentType => ApiError::unsupported_media_type(
                "Unsupported content type: only JPEG, PNG and GIF images are accepted",
            ),
            ImageError::NotFound(id) => ApiError::not_found(format!("Image not found: {}", id)),
            ImageError::StorageUnavailable(msg) => {
                tracing::error!(error = %msg, "Storage unavailable");
                ApiError::service_unavailable("Storage unavailable")
            }
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::new(err.status(), err.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_error_status_mapping() {
        let cases = [
            (
                ImageError::UnsupportedContentType,
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (ImageError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
            (
                ImageError::StorageUnavailable("disk full".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_storage_details_are_not_leaked() {
        let err = ApiError::from(ImageError::StorageUnavailable(
            "/data/img: permission denied".to_string(),
        ));
        assert!(!err.message().contains("/data/img"));
    }
}
