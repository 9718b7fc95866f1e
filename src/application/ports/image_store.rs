use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::domain::value_objects::{ImageId, MediaType};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Port for content-addressed image persistence.
///
/// Implementations derive the identifier from the bytes themselves, so
/// storing identical content twice is idempotent. Failures are returned to
/// the caller as-is; retry policy belongs to the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist `bytes` and return their content-derived identifier.
    /// `media_type` is the sniffed type, used for naming or object metadata.
    async fn put(&self, bytes: &[u8], media_type: MediaType) -> Result<ImageId, StorageError>;

    /// Fetch the bytes stored under `id`
    async fn get(&self, id: &ImageId) -> Result<Vec<u8>, StorageError>;

    /// Check whether an image is stored under `id`
    async fn exists(&self, id: &ImageId) -> Result<bool, StorageError>;

    /// Short backend name for logs and health output
    fn backend_name(&self) -> &'static str;
}
