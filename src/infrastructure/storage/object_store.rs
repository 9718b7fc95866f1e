use async_trait::async_trait;
use opendal::{services, Capability, ErrorKind, Operator};
use tracing::debug;

use crate::application::ports::{ImageStore, StorageError};
use crate::domain::value_objects::{ImageId, MediaType};
use crate::infrastructure::storage::ContentHasher;

/// Connection settings for an S3-compatible bucket
#[derive(Debug, Clone, Default)]
pub struct S3Settings {
    pub bucket: String,
    pub region: String,
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

/// Remote object-store backend.
///
/// One object per image, keyed by `<prefix><id>`, written with the sniffed
/// MIME type as its content type when the service supports it.
#[derive(Clone)]
pub struct ObjectStore {
    operator: Operator,
    prefix: String,
    backend_name: &'static str,
}

impl ObjectStore {
    pub fn new(operator: Operator, prefix: impl Into<String>, backend_name: &'static str) -> Self {
        Self {
            operator,
            prefix: prefix.into(),
            backend_name,
        }
    }

    /// Build an S3 operator from settings
    pub fn s3(settings: &S3Settings, prefix: impl Into<String>) -> Result<Self, StorageError> {
        let mut builder = services::S3::default()
            .bucket(&settings.bucket)
            .region(&settings.region);

        if let Some(ref endpoint) = settings.endpoint {
            builder = builder.endpoint(endpoint);
        }

        if let Some(ref access_key_id) = settings.access_key_id {
            builder = builder.access_key_id(access_key_id);
        }

        if let Some(ref secret_access_key) = settings.secret_access_key {
            builder = builder.secret_access_key(secret_access_key);
        }

        let operator = Operator::new(builder)
            .map_err(|e| StorageError::Unavailable(format!("S3 init failed: {}", e)))?
            .finish();

        Ok(Self::new(operator, prefix, "s3"))
    }

    /// In-process store, used by tests and local experiments
    pub fn memory() -> Result<Self, StorageError> {
        let operator = Operator::new(services::Memory::default())
            .map_err(|e| StorageError::Unavailable(format!("memory init failed: {}", e)))?
            .finish();

        Ok(Self::new(operator, "", "memory"))
    }

    fn key(&self, id: &ImageId) -> String {
        format!("{}{}", self.prefix, id.as_hex())
    }
}

/// Content type to attach on write, if the service can store one
fn write_content_type(capability: Capability, media_type: MediaType) -> Option<&'static str> {
    capability
        .write_with_content_type
        .then(|| media_type.mime_type())
}

fn map_error(key: &str, err: opendal::Error) -> StorageError {
    match err.kind() {
        ErrorKind::NotFound => StorageError::NotFound(key.to_string()),
        _ => StorageError::Unavailable(err.to_string()),
    }
}

#[async_trait]
impl ImageStore for ObjectStore {
    async fn put(&self, bytes: &[u8], media_type: MediaType) -> Result<ImageId, StorageError> {
        let id = ContentHasher::image_id(bytes);
        let key = self.key(&id);

        debug!(key = %key, size = bytes.len(), content_type = %media_type, "Writing object");

        // Object writes are atomic: readers see the old object or the new one.
        let content_type = write_content_type(self.operator.info().full_capability(), media_type);

        let result = match content_type {
            Some(content_type) => self
                .operator
                .write_with(&key, bytes.to_vec())
                .content_type(content_type)
                .await
                .map(|_| ()),
            None => self.operator.write(&key, bytes.to_vec()).await.map(|_| ()),
        };
        result.map_err(|e| map_error(&key, e))?;

        Ok(id)
    }

    async fn get(&self, id: &ImageId) -> Result<Vec<u8>, StorageError> {
        let key = self.key(id);

        let data = self
            .operator
            .read(&key)
            .await
            .map_err(|e| map_error(&key, e))?
            .to_vec();

        debug!(key = %key, size = data.len(), "Object read complete");

        Ok(data)
    }

    async fn exists(&self, id: &ImageId) -> Result<bool, StorageError> {
        let key = self.key(id);
        self.operator
            .exists(&key)
            .await
            .map_err(|e| map_error(&key, e))
    }

    fn backend_name(&self) -> &'static str {
        self.backend_name
    }
}
