use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported content type")]
    UnsupportedContentType,

    #[error("Invalid image ID: {0}")]
    InvalidImageId(String),

    #[error("Unknown media type: {0}")]
    UnknownMediaType(String),
}
