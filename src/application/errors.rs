//! Error taxonomy shared by the ingestion and retrieval use cases.
//!
//! Every variant is recoverable at the HTTP boundary; none of them
//! terminates the process.

use thiserror::Error;

use crate::application::ports::StorageError;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum ImageError {
    /// Bytes match no known image signature
    #[error("Unsupported content type")]
    UnsupportedContentType,

    #[error("Image not found: {0}")]
    NotFound(String),

    /// Backend I/O failure; not retried here
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<StorageError> for ImageError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(id) => ImageError::NotFound(id),
            other => ImageError::StorageUnavailable(other.to_string()),
        }
    }
}

impl From<DomainError> for ImageError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnsupportedContentType | DomainError::UnknownMediaType(_) => {
                ImageError::UnsupportedContentType
            }
            DomainError::InvalidImageId(id) => ImageError::NotFound(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_error_from_storage_not_found() {
        let err: ImageError = StorageError::NotFound("abc".to_string()).into();
        assert!(matches!(err, ImageError::NotFound(ref id) if id == "abc"));
    }

    #[test]
    fn test_image_error_from_storage_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ImageError = StorageError::Io(io).into();
        assert!(matches!(err, ImageError::StorageUnavailable(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_image_error_from_storage_unavailable() {
        let err: ImageError = StorageError::Unavailable("timeout".to_string()).into();
        assert!(matches!(err, ImageError::StorageUnavailable(_)));
    }

    #[test]
    fn test_image_error_from_domain_error() {
        let err: ImageError = DomainError::UnsupportedContentType.into();
        assert!(matches!(err, ImageError::UnsupportedContentType));

        let err: ImageError = DomainError::InvalidImageId("zz".to_string()).into();
        assert!(matches!(err, ImageError::NotFound(_)));
    }

    #[test]
    fn test_error_display_formatting() {
        assert_eq!(
            ImageError::UnsupportedContentType.to_string(),
            "Unsupported content type"
        );
        assert!(ImageError::NotFound("x".to_string())
            .to_string()
            .contains("not found"));
    }
}
